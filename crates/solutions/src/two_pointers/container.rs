/// Returns the most water two lines can hold between them.
///
/// The area of a pair is the distance between the lines times the shorter
/// height. Cursors start at both ends and the shorter line moves inward, since
/// keeping it can only shrink the width without raising the limit.
#[must_use]
pub fn max_area(heights: &[u64]) -> u64 {
    let mut best = 0;
    let mut left = 0;
    let mut right = heights.len().saturating_sub(1);

    while left < right {
        let width = u64::try_from(right - left).unwrap_or(u64::MAX);
        let area = width.saturating_mul(heights[left].min(heights[right]));
        best = best.max(area);

        if heights[left] <= heights[right] {
            left += 1;
        } else {
            right -= 1;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_cases() {
        assert_eq!(max_area(&[1, 8, 6, 2, 5, 4, 8, 3, 7]), 49);
        assert_eq!(max_area(&[1, 1]), 1);
    }

    #[test]
    fn fewer_than_two_lines_hold_nothing() {
        assert_eq!(max_area(&[]), 0);
        assert_eq!(max_area(&[42]), 0);
    }

    #[test]
    fn flat_zero_heights() {
        assert_eq!(max_area(&[0, 0, 0]), 0);
    }

    #[test]
    fn tall_walls_far_apart() {
        assert_eq!(max_area(&[10, 1, 1, 1, 10]), 40);
    }
}

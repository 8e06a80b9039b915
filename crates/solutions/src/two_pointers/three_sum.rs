/// Returns every distinct triplet of values that sums to zero.
///
/// Each triplet is sorted ascending and the list is in lexicographic order.
/// The input is copied and sorted; for each anchor a pair of cursors closes
/// in from both ends of the remainder, skipping repeated values so no triplet
/// is reported twice.
#[must_use]
pub fn three_sum(values: &[i64]) -> Vec<[i64; 3]> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mut triplets = Vec::new();
    for anchor in 0..sorted.len().saturating_sub(2) {
        if anchor > 0 && sorted[anchor] == sorted[anchor - 1] {
            continue;
        }

        let mut left = anchor + 1;
        let mut right = sorted.len() - 1;
        while left < right {
            let total = i128::from(sorted[anchor])
                + i128::from(sorted[left])
                + i128::from(sorted[right]);
            match total.cmp(&0) {
                std::cmp::Ordering::Less => left += 1,
                std::cmp::Ordering::Greater => right -= 1,
                std::cmp::Ordering::Equal => {
                    triplets.push([sorted[anchor], sorted[left], sorted[right]]);
                    left += 1;
                    right -= 1;
                    while left < right && sorted[left] == sorted[left - 1] {
                        left += 1;
                    }
                    while left < right && sorted[right] == sorted[right + 1] {
                        right -= 1;
                    }
                }
            }
        }
    }

    triplets
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn reference_case() {
        assert_eq!(three_sum(&[-1, 0, 1, 2, -1, -4]), vec![[-1, -1, 2], [-1, 0, 1]]);
    }

    #[test]
    fn no_triplets() {
        assert!(three_sum(&[0, 1, 1]).is_empty());
        assert!(three_sum(&[]).is_empty());
        assert!(three_sum(&[0, 0]).is_empty());
    }

    #[test]
    fn repeated_zeros_report_once() {
        assert_eq!(three_sum(&[0, 0, 0, 0]), vec![[0, 0, 0]]);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert!(three_sum(&[i64::MAX, i64::MAX, i64::MIN]).is_empty());
        assert_eq!(three_sum(&[i64::MIN, i64::MAX, 1]), vec![[i64::MIN, 1, i64::MAX]]);
    }

    proptest! {
        #[test]
        fn matches_brute_force(values in prop::collection::vec(-6i64..6, 0..12)) {
            let mut expected = Vec::new();
            for i in 0..values.len() {
                for j in i + 1..values.len() {
                    for k in j + 1..values.len() {
                        if values[i] + values[j] + values[k] == 0 {
                            let mut triplet = [values[i], values[j], values[k]];
                            triplet.sort_unstable();
                            expected.push(triplet);
                        }
                    }
                }
            }
            expected.sort_unstable();
            expected.dedup();

            prop_assert_eq!(three_sum(&values), expected);
        }
    }
}

/// Returns the smallest value of an ascending slice of distinct values that
/// has been rotated by an unknown amount, or `None` if it is empty.
///
/// Each step either finds an already-sorted range, whose first value is its
/// minimum, or discards the half that cannot hold the rotation point.
#[must_use]
pub fn find_min_rotated(values: &[i64]) -> Option<i64> {
    let mut answer = *values.first()?;
    let mut left = 0;
    let mut right = values.len() - 1;

    loop {
        if values[left] <= values[right] {
            return Some(answer.min(values[left]));
        }

        let middle = left + (right - left) / 2;
        answer = answer.min(values[middle]);

        if values[middle] >= values[left] {
            left = middle + 1;
        } else {
            right = middle - 1;
        }
    }
}

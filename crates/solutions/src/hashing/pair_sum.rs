use std::collections::HashMap;

/// Finds the first pair of positions whose values add up to `target`.
///
/// Scans `values` once, remembering the first position of every value seen so
/// far. At position `j` the complement `target - values[j]` is looked up; the
/// first hit returns `(i, j)` with `i < j`. When several pairs qualify, the one
/// whose second position comes earliest wins, and among those the earliest
/// occurrence of the complement.
///
/// Returns `None` when no pair sums to `target`, including for empty and
/// single-element input.
///
/// # Examples
///
/// ```
/// use drills_solutions::hashing::find_pair_indices;
///
/// assert_eq!(find_pair_indices(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(find_pair_indices(&[1, 2, 3], 10), None);
/// ```
#[must_use]
pub fn find_pair_indices(values: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(values.len());

    for (index, &value) in values.iter().enumerate() {
        // An unrepresentable complement can't be in the slice.
        if let Some(&earlier) = target
            .checked_sub(value)
            .and_then(|complement| seen.get(&complement))
        {
            return Some((earlier, index));
        }
        seen.entry(value).or_insert(index);
    }

    None
}

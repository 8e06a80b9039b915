use std::collections::HashMap;

/// Returns the `k` most frequent values, most frequent first.
///
/// Values with equal counts keep the order in which they first appear. If
/// there are fewer than `k` distinct values, all of them are returned.
#[must_use]
pub fn top_k_frequent(values: &[i64], k: usize) -> Vec<i64> {
    // Distinct values in first-appearance order, with their counts.
    let mut counts: Vec<(i64, usize)> = Vec::new();
    let mut slots: HashMap<i64, usize> = HashMap::new();

    for &value in values {
        let slot = *slots.entry(value).or_insert_with(|| {
            counts.push((value, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    // Stable, so ties stay in first-appearance order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(k).map(|(value, _)| value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_frequent_first() {
        assert_eq!(top_k_frequent(&[1, 1, 1, 2, 2, 3], 2), vec![1, 2]);
        assert_eq!(top_k_frequent(&[1], 1), vec![1]);
    }

    #[test]
    fn ties_keep_first_appearance() {
        assert_eq!(top_k_frequent(&[4, 5, 5, 4, 6], 2), vec![4, 5]);
        assert_eq!(top_k_frequent(&[9, 8, 7], 3), vec![9, 8, 7]);
    }

    #[test]
    fn k_beyond_distinct_values() {
        assert_eq!(top_k_frequent(&[2, 2, 3], 10), vec![2, 3]);
        assert!(top_k_frequent(&[], 3).is_empty());
        assert!(top_k_frequent(&[1, 2], 0).is_empty());
    }
}

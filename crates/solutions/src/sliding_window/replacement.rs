use std::collections::HashMap;

/// Returns the length of the longest substring that can be turned into a run
/// of one repeated character by replacing at most `k` characters.
///
/// A window is valid while `width - most_common <= k`. The recorded
/// `most_common` is never lowered when the window shrinks: a stale, larger
/// value only keeps the window at its best width so far, and a longer window
/// can only be accepted once some character really is that frequent.
#[must_use]
pub fn character_replacement(text: &str, k: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut most_common = 0;
    let mut left = 0;
    let mut best = 0;

    for (right, &ch) in chars.iter().enumerate() {
        let count = counts.entry(ch).or_insert(0);
        *count += 1;
        most_common = most_common.max(*count);

        while right - left + 1 - most_common > k {
            if let Some(count) = counts.get_mut(&chars[left]) {
                *count -= 1;
            }
            left += 1;
        }

        best = best.max(right - left + 1);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_cases() {
        assert_eq!(character_replacement("ABAB", 2), 4);
        assert_eq!(character_replacement("AABABBA", 1), 4);
    }

    #[test]
    fn no_replacements() {
        assert_eq!(character_replacement("AABBBA", 0), 3);
        assert_eq!(character_replacement("ABC", 0), 1);
    }

    #[test]
    fn k_covers_whole_string() {
        assert_eq!(character_replacement("ABCDE", 10), 5);
    }

    #[test]
    fn empty_text() {
        assert_eq!(character_replacement("", 3), 0);
    }
}

use std::collections::HashMap;

/// Returns the length, in characters, of the longest substring without a
/// repeated character.
#[must_use]
pub fn longest_unique_substring(text: &str) -> usize {
    let mut last_seen: HashMap<char, usize> = HashMap::new();
    let mut left = 0;
    let mut best = 0;

    for (right, ch) in text.chars().enumerate() {
        if let Some(&previous) = last_seen.get(&ch).filter(|&&previous| previous >= left) {
            left = previous + 1;
        }
        last_seen.insert(ch, right);
        best = best.max(right - left + 1);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_cases() {
        assert_eq!(longest_unique_substring("abcabcbb"), 3);
        assert_eq!(longest_unique_substring("bbbbb"), 1);
        assert_eq!(longest_unique_substring("pwwkew"), 3);
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(longest_unique_substring(""), 0);
        assert_eq!(longest_unique_substring(" "), 1);
    }

    #[test]
    fn stale_positions_do_not_shrink_the_window() {
        // The first `a` is already outside the window when it repeats.
        assert_eq!(longest_unique_substring("abba"), 2);
        assert_eq!(longest_unique_substring("tmmzuxt"), 5);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(longest_unique_substring("日本日本語"), 3);
    }
}

use std::collections::HashMap;

/// Returns `true` if some window of `text` is a rearrangement of `pattern`.
///
/// A fixed-width window slides across `text` while a per-character balance
/// (pattern count minus window count) and the number of unbalanced
/// characters are maintained in constant time per step.
#[must_use]
pub fn contains_permutation(pattern: &str, text: &str) -> bool {
    let width = pattern.chars().count();
    if width == 0 {
        return true;
    }

    let text: Vec<char> = text.chars().collect();
    if width > text.len() {
        return false;
    }

    let mut balance: HashMap<char, i64> = HashMap::new();
    for ch in pattern.chars() {
        *balance.entry(ch).or_insert(0) += 1;
    }
    let mut unbalanced = balance.len();

    for (index, &ch) in text.iter().enumerate() {
        shift(&mut balance, &mut unbalanced, ch, -1);
        if index >= width {
            shift(&mut balance, &mut unbalanced, text[index - width], 1);
        }
        if unbalanced == 0 {
            return true;
        }
    }

    false
}

fn shift(balance: &mut HashMap<char, i64>, unbalanced: &mut usize, ch: char, delta: i64) {
    let entry = balance.entry(ch).or_insert(0);
    let before = *entry;
    *entry += delta;

    if before == 0 {
        *unbalanced += 1;
    } else if *entry == 0 {
        *unbalanced -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_cases() {
        assert!(contains_permutation("ab", "eidbaooo"));
        assert!(!contains_permutation("ab", "eidboaoo"));
    }

    #[test]
    fn pattern_longer_than_text() {
        assert!(!contains_permutation("abc", "ab"));
    }

    #[test]
    fn empty_pattern_always_fits() {
        assert!(contains_permutation("", ""));
        assert!(contains_permutation("", "xyz"));
    }

    #[test]
    fn multiplicity_matters() {
        assert!(!contains_permutation("aab", "abbab"));
        assert!(contains_permutation("aab", "xbaa"));
    }

    #[test]
    fn window_at_the_very_end() {
        assert!(contains_permutation("zy", "abcyz"));
    }

    #[test]
    fn any_characters() {
        assert!(contains_permutation("Ab!", "x!bA"));
        assert!(!contains_permutation("ab", "AB"));
    }
}

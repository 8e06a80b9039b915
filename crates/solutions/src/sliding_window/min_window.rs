use std::collections::HashMap;

/// Returns the shortest substring of `text` containing every character of
/// `required`, counted with multiplicity.
///
/// The window grows to the right until it covers `required`, then shrinks from
/// the left for as long as it still does. Among equally short windows the
/// leftmost wins. Returns `""` when no window qualifies or either input is
/// empty.
#[must_use]
pub fn min_window<'a>(text: &'a str, required: &str) -> &'a str {
    if text.is_empty() || required.is_empty() {
        return "";
    }

    let mut need: HashMap<char, usize> = HashMap::new();
    for ch in required.chars() {
        *need.entry(ch).or_insert(0) += 1;
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut window: HashMap<char, usize> = HashMap::new();
    let mut satisfied = 0;
    let mut best: Option<(usize, usize)> = None;
    let mut left = 0;

    for (right, &(_, ch)) in chars.iter().enumerate() {
        let count = window.entry(ch).or_insert(0);
        *count += 1;
        if need.get(&ch) == Some(&*count) {
            satisfied += 1;
        }

        while satisfied == need.len() {
            if best.is_none_or(|(start, end)| right - left < end - start) {
                best = Some((left, right));
            }

            let (_, dropped) = chars[left];
            if let Some(count) = window.get_mut(&dropped) {
                if need.get(&dropped) == Some(&*count) {
                    satisfied -= 1;
                }
                *count -= 1;
            }
            left += 1;
        }
    }

    best.map_or("", |(start, end)| {
        let (from, _) = chars[start];
        let (last, ch) = chars[end];
        &text[from..last + ch.len_utf8()]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_cases() {
        assert_eq!(min_window("ADOBECODEBANC", "ABC"), "BANC");
        assert_eq!(min_window("a", "a"), "a");
        assert_eq!(min_window("a", "aa"), "");
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(min_window("", "a"), "");
        assert_eq!(min_window("abc", ""), "");
    }

    #[test]
    fn leftmost_of_equal_windows() {
        assert_eq!(min_window("abxba", "ab"), "ab");
    }

    #[test]
    fn multiplicity_is_required() {
        assert_eq!(min_window("aaflslflsldkalskaaa", "aaa"), "aaa");
        assert_eq!(min_window("abab", "aab"), "aba");
    }

    #[test]
    fn returns_slice_of_multibyte_text() {
        assert_eq!(min_window("xx日yy本zz日本", "本日"), "日本");
    }
}

/// Returns `true` if the ASCII letters and digits of `text` read the same in
/// both directions, ignoring case.
///
/// Text is lowercased with full Unicode rules first, then everything outside
/// `a-z` and `0-9` is dropped. A character whose lowercase form is ASCII,
/// such as the Kelvin sign, therefore counts as that letter. Text with
/// nothing left after cleaning is a palindrome.
///
/// # Examples
///
/// ```
/// use drills_solutions::two_pointers::is_palindrome;
///
/// assert!(is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(!is_palindrome("race a car"));
/// ```
#[must_use]
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: Vec<char> = text
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    if cleaned.is_empty() {
        return true;
    }

    let mut left = 0;
    let mut right = cleaned.len() - 1;
    while left < right {
        if cleaned[left] != cleaned[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }

    true
}

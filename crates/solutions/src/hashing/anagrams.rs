use std::collections::HashMap;

/// Groups words that are anagrams of each other.
///
/// Two words belong together when sorting their characters gives the same
/// sequence. Groups appear in the order their first word appears, and words
/// keep their input order inside a group.
#[must_use]
pub fn group_anagrams<S: AsRef<str>>(words: &[S]) -> Vec<Vec<String>> {
    let mut slots: HashMap<Vec<char>, usize> = HashMap::new();
    let mut groups: Vec<Vec<String>> = Vec::new();

    for word in words {
        let word = word.as_ref();
        let mut key: Vec<char> = word.chars().collect();
        key.sort_unstable();

        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(word.to_owned());
    }

    groups
}

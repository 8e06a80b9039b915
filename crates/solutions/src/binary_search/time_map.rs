use std::collections::HashMap;

/// A key-value store that remembers every value a key has held.
///
/// Each key keeps its history sorted by timestamp, so [`TimeMap::get`] is a
/// binary search for the latest entry at or before the requested time.
///
/// ```
/// use drills_solutions::binary_search::TimeMap;
///
/// let mut map = TimeMap::new();
/// map.set("foo", "bar", 1);
/// map.set("foo", "bar2", 4);
///
/// assert_eq!(map.get("foo", 3), Some("bar"));
/// assert_eq!(map.get("foo", 5), Some("bar2"));
/// assert_eq!(map.get("foo", 0), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimeMap {
    history: HashMap<String, Vec<(u64, String)>>,
}

impl TimeMap {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` for `key` at `timestamp`.
    ///
    /// Timestamps may arrive in any order. Setting a timestamp that already
    /// exists for `key` replaces its value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>, timestamp: u64) {
        let entries = self.history.entry(key.into()).or_default();
        let value = value.into();

        // Appending in time order is the common case.
        if entries.last().is_none_or(|&(last, _)| last < timestamp) {
            entries.push((timestamp, value));
            return;
        }

        match entries.binary_search_by_key(&timestamp, |&(time, _)| time) {
            Ok(index) => entries[index].1 = value,
            Err(index) => entries.insert(index, (timestamp, value)),
        }
    }

    /// Returns the value `key` held at `timestamp`: the one set with the
    /// greatest timestamp not after it.
    #[must_use]
    pub fn get(&self, key: &str, timestamp: u64) -> Option<&str> {
        let entries = self.history.get(key)?;
        let after = entries.partition_point(|&(time, _)| time <= timestamp);
        let (_, value) = entries.get(after.checked_sub(1)?)?;
        Some(value.as_str())
    }

    /// Returns the number of stored entries across all keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.values().map(Vec::len).sum()
    }

    /// Returns `true` if nothing has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

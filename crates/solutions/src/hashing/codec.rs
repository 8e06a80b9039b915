//! Length-prefixed encoding of a list of strings into one string.
//!
//! Each item is written as its byte length in decimal, a `#`, then the item
//! itself. Because the length is read before the payload, items may contain
//! `#`, digits, or any other character.
//!
//! ```
//! use drills_solutions::hashing::codec::{decode, encode};
//!
//! let encoded = encode(&["lint", "co#de"]);
//! assert_eq!(encoded, "4#lint5#co#de");
//! assert_eq!(decode(&encoded).unwrap(), vec!["lint", "co#de"]);
//! ```

use thiserror::Error;

/// Marks the end of a length prefix.
pub const SEPARATOR: char = '#';

/// Errors that can occur when decoding.
///
/// Offsets are byte offsets into the encoded string.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("no `#` after the length prefix at offset {offset}")]
    MissingSeparator { offset: usize },

    #[error("length prefix at offset {offset} is not a decimal number")]
    InvalidLength { offset: usize },

    #[error("item at offset {offset} needs {expected} bytes but only {available} remain")]
    Truncated {
        offset: usize,
        expected: usize,
        available: usize,
    },

    #[error("item ending near offset {offset} splits a UTF-8 character")]
    CharBoundary { offset: usize },
}

/// Encodes `strings` into a single string.
#[must_use]
pub fn encode<S: AsRef<str>>(strings: &[S]) -> String {
    let mut encoded = String::new();
    for text in strings {
        let text = text.as_ref();
        encoded.push_str(&text.len().to_string());
        encoded.push(SEPARATOR);
        encoded.push_str(text);
    }
    encoded
}

/// Decodes a string produced by [`encode`].
///
/// # Errors
///
/// Returns a [`DecodeError`] describing the first malformed item.
pub fn decode(encoded: &str) -> Result<Vec<String>, DecodeError> {
    let mut strings = Vec::new();
    let mut offset = 0;

    while offset < encoded.len() {
        let rest = &encoded[offset..];
        let separator = rest
            .find(SEPARATOR)
            .ok_or(DecodeError::MissingSeparator { offset })?;

        let digits = &rest[..separator];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecodeError::InvalidLength { offset });
        }
        let expected: usize = digits
            .parse()
            .map_err(|_| DecodeError::InvalidLength { offset })?;

        let start = offset + separator + SEPARATOR.len_utf8();
        let available = encoded.len() - start;
        if expected > available {
            return Err(DecodeError::Truncated {
                offset,
                expected,
                available,
            });
        }

        let end = start + expected;
        let text = encoded
            .get(start..end)
            .ok_or(DecodeError::CharBoundary { offset: end })?;
        strings.push(text.to_owned());
        offset = end;
    }

    Ok(strings)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn empty_list_is_empty_string() {
        assert_eq!(encode::<&str>(&[]), "");
        assert_eq!(decode(""), Ok(vec![]));
    }

    #[test]
    fn empty_items_survive() {
        let encoded = encode(&["", "", "x"]);
        assert_eq!(encoded, "0#0#1#x");
        assert_eq!(decode(&encoded).unwrap(), vec!["", "", "x"]);
    }

    #[test]
    fn lengths_count_bytes() {
        assert_eq!(encode(&["héllo"]), "6#héllo");
        assert_eq!(decode("6#héllo").unwrap(), vec!["héllo"]);
    }

    #[test]
    fn malformed_input() {
        assert_eq!(decode("3abc"), Err(DecodeError::MissingSeparator { offset: 0 }));
        assert_eq!(decode("#abc"), Err(DecodeError::InvalidLength { offset: 0 }));
        assert_eq!(decode("1#a+1#b"), Err(DecodeError::InvalidLength { offset: 3 }));
        assert_eq!(
            decode("2#ab5#cd"),
            Err(DecodeError::Truncated {
                offset: 4,
                expected: 5,
                available: 2
            })
        );
        assert_eq!(decode("1#é"), Err(DecodeError::CharBoundary { offset: 3 }));
        assert_eq!(
            decode("99999999999999999999999#"),
            Err(DecodeError::InvalidLength { offset: 0 })
        );
    }

    proptest! {
        #[test]
        fn round_trips_any_strings(strings in prop::collection::vec(any::<String>(), 0..8)) {
            prop_assert_eq!(decode(&encode(&strings)).unwrap(), strings);
        }

        #[test]
        fn round_trips_separator_heavy_strings(
            strings in prop::collection::vec("[0-9#]{0,6}", 0..8),
        ) {
            prop_assert_eq!(decode(&encode(&strings)).unwrap(), strings);
        }
    }
}

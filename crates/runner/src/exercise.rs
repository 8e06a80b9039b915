use serde::Deserialize;

use drills_core::{Grid, Interval};
use drills_solutions::{
    binary_search::{find_min_rotated, min_eating_speed},
    dynamic::coin_change,
    graphs::count_islands,
    hashing::{
        codec::{decode, encode},
        find_pair_indices, group_anagrams, product_except_self, top_k_frequent,
    },
    heap::kth_largest,
    intervals::insert_interval,
    sliding_window::{
        character_replacement, contains_permutation, longest_unique_substring, min_window,
    },
    two_pointers::{is_palindrome, max_area, three_sum},
};

use crate::Outcome;

/// Names accepted in a case's `exercise` field.
pub const EXERCISES: [&str; 18] = [
    "pair-sum",
    "palindrome",
    "product-except-self",
    "group-anagrams",
    "top-k-frequent",
    "codec",
    "three-sum",
    "max-area",
    "longest-unique-substring",
    "character-replacement",
    "contains-permutation",
    "min-window",
    "find-min-rotated",
    "min-eating-speed",
    "insert-interval",
    "kth-largest",
    "coin-change",
    "count-islands",
];

/// One exercise invocation together with its expected answer.
///
/// Answers that may be absent (`pair-sum`, `find-min-rotated`,
/// `coin-change`) are written by leaving `expected` out, so any key a
/// variant does not name is rejected rather than ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "exercise", rename_all = "kebab-case", deny_unknown_fields)]
pub enum Exercise {
    PairSum {
        values: Vec<i64>,
        target: i64,
        #[serde(default)]
        expected: Option<[usize; 2]>,
    },
    Palindrome {
        text: String,
        expected: bool,
    },
    ProductExceptSelf {
        values: Vec<i64>,
        expected: Vec<i64>,
    },
    GroupAnagrams {
        words: Vec<String>,
        expected: Vec<Vec<String>>,
    },
    TopKFrequent {
        values: Vec<i64>,
        k: usize,
        expected: Vec<i64>,
    },
    /// Checks the encoded form and that decoding it restores `strings`.
    Codec {
        strings: Vec<String>,
        expected: String,
    },
    ThreeSum {
        values: Vec<i64>,
        expected: Vec<[i64; 3]>,
    },
    MaxArea {
        heights: Vec<u64>,
        expected: u64,
    },
    LongestUniqueSubstring {
        text: String,
        expected: usize,
    },
    CharacterReplacement {
        text: String,
        k: usize,
        expected: usize,
    },
    ContainsPermutation {
        pattern: String,
        text: String,
        expected: bool,
    },
    MinWindow {
        text: String,
        required: String,
        expected: String,
    },
    FindMinRotated {
        values: Vec<i64>,
        #[serde(default)]
        expected: Option<i64>,
    },
    MinEatingSpeed {
        piles: Vec<u64>,
        hours: u64,
        expected: u64,
    },
    InsertInterval {
        intervals: Vec<[i64; 2]>,
        new: [i64; 2],
        expected: Vec<[i64; 2]>,
    },
    KthLargest {
        values: Vec<i64>,
        k: usize,
        expected: i64,
    },
    CoinChange {
        coins: Vec<u64>,
        amount: u64,
        #[serde(default)]
        expected: Option<u64>,
    },
    /// `grid` rows are strings of `'1'` (land) and `'0'` (water).
    CountIslands {
        grid: Vec<String>,
        expected: usize,
    },
}

impl Exercise {
    /// Returns the kebab-case name used in case files.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PairSum { .. } => "pair-sum",
            Self::Palindrome { .. } => "palindrome",
            Self::ProductExceptSelf { .. } => "product-except-self",
            Self::GroupAnagrams { .. } => "group-anagrams",
            Self::TopKFrequent { .. } => "top-k-frequent",
            Self::Codec { .. } => "codec",
            Self::ThreeSum { .. } => "three-sum",
            Self::MaxArea { .. } => "max-area",
            Self::LongestUniqueSubstring { .. } => "longest-unique-substring",
            Self::CharacterReplacement { .. } => "character-replacement",
            Self::ContainsPermutation { .. } => "contains-permutation",
            Self::MinWindow { .. } => "min-window",
            Self::FindMinRotated { .. } => "find-min-rotated",
            Self::MinEatingSpeed { .. } => "min-eating-speed",
            Self::InsertInterval { .. } => "insert-interval",
            Self::KthLargest { .. } => "kth-largest",
            Self::CoinChange { .. } => "coin-change",
            Self::CountIslands { .. } => "count-islands",
        }
    }

    /// Runs the exercise and compares its answer with `expected`.
    #[must_use]
    pub fn check(&self) -> Outcome {
        match self {
            Self::PairSum {
                values,
                target,
                expected,
            } => {
                let actual = find_pair_indices(values, *target).map(|(i, j)| [i, j]);
                Outcome::compare(expected, &actual)
            }
            Self::Palindrome { text, expected } => Outcome::compare(expected, &is_palindrome(text)),
            Self::ProductExceptSelf { values, expected } => {
                Outcome::compare_result(expected, product_except_self(values))
            }
            Self::GroupAnagrams { words, expected } => {
                Outcome::compare(expected, &group_anagrams(words))
            }
            Self::TopKFrequent {
                values,
                k,
                expected,
            } => Outcome::compare(expected, &top_k_frequent(values, *k)),
            Self::Codec { strings, expected } => {
                let encoded = encode(strings);
                match Outcome::compare(expected, &encoded) {
                    Outcome::Pass => Outcome::compare_result(strings, decode(&encoded)),
                    mismatch => mismatch,
                }
            }
            Self::ThreeSum { values, expected } => Outcome::compare(expected, &three_sum(values)),
            Self::MaxArea { heights, expected } => Outcome::compare(expected, &max_area(heights)),
            Self::LongestUniqueSubstring { text, expected } => {
                Outcome::compare(expected, &longest_unique_substring(text))
            }
            Self::CharacterReplacement { text, k, expected } => {
                Outcome::compare(expected, &character_replacement(text, *k))
            }
            Self::ContainsPermutation {
                pattern,
                text,
                expected,
            } => Outcome::compare(expected, &contains_permutation(pattern, text)),
            Self::MinWindow {
                text,
                required,
                expected,
            } => Outcome::compare(&expected.as_str(), &min_window(text, required)),
            Self::FindMinRotated { values, expected } => {
                Outcome::compare(expected, &find_min_rotated(values))
            }
            Self::MinEatingSpeed {
                piles,
                hours,
                expected,
            } => Outcome::compare_result(expected, min_eating_speed(piles, *hours)),
            Self::InsertInterval {
                intervals,
                new,
                expected,
            } => check_insert_interval(intervals, *new, expected),
            Self::KthLargest {
                values,
                k,
                expected,
            } => Outcome::compare_result(expected, kth_largest(values, *k)),
            Self::CoinChange {
                coins,
                amount,
                expected,
            } => Outcome::compare_result(expected, coin_change(coins, *amount)),
            Self::CountIslands { grid, expected } => match Grid::parse(grid) {
                Ok(grid) => Outcome::compare(expected, &count_islands(&grid)),
                Err(error) => Outcome::invalid(error),
            },
        }
    }
}

fn check_insert_interval(intervals: &[[i64; 2]], new: [i64; 2], expected: &[[i64; 2]]) -> Outcome {
    let parsed = intervals
        .iter()
        .map(|&bounds| Interval::try_from(bounds))
        .collect::<Result<Vec<_>, _>>()
        .and_then(|intervals| Ok((intervals, Interval::try_from(new)?)));

    match parsed {
        Ok((intervals, new)) => {
            let actual: Vec<[i64; 2]> = insert_interval(&intervals, new)
                .into_iter()
                .map(<[i64; 2]>::from)
                .collect();
            Outcome::compare(&expected.to_vec(), &actual)
        }
        Err(error) => Outcome::invalid(error),
    }
}

//! Textbook coding-interview exercises, each a standalone function.
//!
//! Exercises are grouped by the technique they practise:
//!
//! - [`hashing`] — single-pass lookups and frequency tables, including
//!   [`find_pair_indices`](hashing::find_pair_indices)
//! - [`two_pointers`] — cursors converging from both ends, including
//!   [`is_palindrome`](two_pointers::is_palindrome)
//! - [`sliding_window`] — variable-width windows over strings
//! - [`binary_search`] — halving a sorted or monotone search space
//! - [`intervals`] — merging sorted ranges
//! - [`linked_list`] — pointer rewiring and cycle detection
//! - [`trees`] — binary tree traversal and search tree walks
//! - [`graphs`] — connected components and deep copies
//! - [`heap`] — order statistics with a bounded heap
//! - [`dynamic`] — bottom-up tables
//!
//! No exercise shares state with another. "Not found" answers are ordinary
//! values (`None`, `false`, an empty collection); error types are reserved
//! for inputs that leave the question itself undefined.

pub mod binary_search;
pub mod dynamic;
pub mod graphs;
pub mod hashing;
pub mod heap;
pub mod intervals;
pub mod linked_list;
pub mod sliding_window;
pub mod trees;
pub mod two_pointers;

//! Exercises solved with hash maps and frequency tables.
//!
//! - [`find_pair_indices`] — first pair of positions summing to a target
//! - [`product_except_self`] — products of all other entries, without division
//! - [`group_anagrams`] — words bucketed by their letters
//! - [`top_k_frequent`] — most common values
//! - [`codec`] — length-prefixed encoding of a list of strings

pub mod codec;

mod anagrams;
mod frequency;
mod pair_sum;
mod product;

pub use anagrams::group_anagrams;
pub use frequency::top_k_frequent;
pub use pair_sum::find_pair_indices;
pub use product::{ProductError, product_except_self};

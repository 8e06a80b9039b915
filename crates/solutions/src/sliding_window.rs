//! Exercises over variable-width windows of a string.
//!
//! Windows are measured in `char`s. [`min_window`] returns a slice of its
//! input, so its bounds are tracked as byte offsets.

mod min_window;
mod permutation;
mod replacement;
mod unique;

pub use min_window::min_window;
pub use permutation::contains_permutation;
pub use replacement::character_replacement;
pub use unique::longest_unique_substring;

//! Exercises solved with cursors that walk toward each other.
//!
//! - [`is_palindrome`] — alphanumeric palindrome check
//! - [`three_sum`] — unique zero-sum triplets
//! - [`max_area`] — container with the most water

mod container;
mod palindrome;
mod three_sum;

pub use container::max_area;
pub use palindrome::is_palindrome;
pub use three_sum::three_sum;

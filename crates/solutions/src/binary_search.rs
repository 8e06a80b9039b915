//! Exercises solved by repeatedly halving a search space.
//!
//! - [`find_min_rotated`] — minimum of a rotated sorted slice
//! - [`min_eating_speed`] — smallest feasible rate, searched over the answer
//! - [`TimeMap`] — versioned key-value lookups by timestamp

mod eating_speed;
mod rotated;
mod time_map;

pub use eating_speed::{EatingSpeedError, min_eating_speed};
pub use rotated::find_min_rotated;
pub use time_map::TimeMap;

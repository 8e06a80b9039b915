//! Checks exercise answers against expectations stored in TOML case files.
//!
//! A case file is a list of `[[case]]` tables. Each names its exercise with
//! `exercise = "<kebab-name>"`, supplies that exercise's inputs as further
//! keys, and gives the answer under `expected`:
//!
//! ```
//! use drills_runner::CaseFile;
//!
//! let file = CaseFile::from_toml(
//!     r#"
//!     [[case]]
//!     exercise = "palindrome"
//!     text = "race a car"
//!     expected = false
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(file.cases()[0].check().is_pass());
//! ```
//!
//! See [`EXERCISES`] for the accepted names and [`Exercise`] for each one's
//! keys.

mod case;
mod error;
mod exercise;
mod outcome;

pub use case::{Case, CaseFile};
pub use error::LoadError;
pub use exercise::{EXERCISES, Exercise};
pub use outcome::{Outcome, Summary};

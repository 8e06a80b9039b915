//! Shared helpers for the cross-crate tests.

use std::path::PathBuf;

/// Returns the directory holding the runner's shipped case files.
#[must_use]
pub fn cases_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../crates/runner/cases")
}

/// Returns every shipped case file, sorted by name.
///
/// # Panics
///
/// Panics if the case directory cannot be read.
#[must_use]
pub fn case_files() -> Vec<PathBuf> {
    let mut files: Vec<_> = std::fs::read_dir(cases_dir())
        .expect("case directory should be readable")
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    files.sort();
    files
}

//! Order statistics with a bounded heap.

use std::{cmp::Reverse, collections::BinaryHeap};

use thiserror::Error;

/// Errors that can occur when asking for the `k`-th largest value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RankError {
    #[error("rank {k} is outside 1..={len}")]
    OutOfRange { k: usize, len: usize },
}

/// Returns the `k`-th largest value, counting duplicates separately.
///
/// Keeps a min-heap of the `k` largest values seen so far, so the answer is
/// its smallest element once every value has been offered.
///
/// # Errors
///
/// Returns [`RankError::OutOfRange`] if `k` is zero or exceeds `values.len()`.
pub fn kth_largest(values: &[i64], k: usize) -> Result<i64, RankError> {
    if k == 0 || k > values.len() {
        return Err(RankError::OutOfRange {
            k,
            len: values.len(),
        });
    }

    let mut largest = BinaryHeap::with_capacity(k + 1);
    for &value in values {
        largest.push(Reverse(value));
        if largest.len() > k {
            largest.pop();
        }
    }

    largest
        .peek()
        .map(|&Reverse(value)| value)
        .ok_or(RankError::OutOfRange {
            k,
            len: values.len(),
        })
}

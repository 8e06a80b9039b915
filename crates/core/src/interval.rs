use std::fmt;

use thiserror::Error;

/// A closed integer range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    start: i64,
    end: i64,
}

/// Errors that can occur when constructing an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    #[error("interval start {start} is greater than end {end}")]
    Reversed { start: i64, end: i64 },
}

impl Interval {
    /// Creates a new interval.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::Reversed`] if `start > end`.
    pub fn new(start: i64, end: i64) -> Result<Self, IntervalError> {
        if start > end {
            return Err(IntervalError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Returns `true` if the two intervals share at least one point.
    ///
    /// Intervals that only touch at an endpoint overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns the smallest interval covering both.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl TryFrom<[i64; 2]> for Interval {
    type Error = IntervalError;

    fn try_from([start, end]: [i64; 2]) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl From<Interval> for [i64; 2] {
    fn from(interval: Interval) -> Self {
        [interval.start, interval.end]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn rejects_reversed_bounds() {
        assert_eq!(
            Interval::new(5, 2),
            Err(IntervalError::Reversed { start: 5, end: 2 })
        );
        assert!(Interval::new(3, 3).is_ok());
    }

    #[test]
    fn touching_intervals_overlap() {
        let a = Interval::new(1, 3).unwrap();
        let b = Interval::new(3, 7).unwrap();
        let c = Interval::new(4, 5).unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn array_conversions() {
        let interval = Interval::try_from([2, 9]).unwrap();
        assert_eq!(<[i64; 2]>::from(interval), [2, 9]);
        assert_eq!(interval.to_string(), "[2, 9]");
        assert!(Interval::try_from([9, 2]).is_err());
    }

    proptest! {
        #[test]
        fn merge_covers_both(a in -100i64..100, b in 0i64..50, c in -100i64..100, d in 0i64..50) {
            let x = Interval::new(a, a + b).unwrap();
            let y = Interval::new(c, c + d).unwrap();
            let merged = x.merge(&y);

            prop_assert!(merged.start() <= x.start() && merged.start() <= y.start());
            prop_assert!(merged.end() >= x.end() && merged.end() >= y.end());
            prop_assert_eq!(merged, y.merge(&x));
        }
    }
}

use std::fmt;

/// The result of checking one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The exercise produced the expected answer.
    Pass,

    /// The exercise produced a different answer.
    ///
    /// Both sides are rendered with their `Debug` form, or as `error: ...`
    /// when the exercise rejected its input.
    Fail { expected: String, actual: String },

    /// The case itself is malformed, such as a reversed interval or a ragged
    /// grid, so the exercise was never run.
    Invalid { reason: String },
}

impl Outcome {
    /// Compares an answer against the expectation.
    pub fn compare<T: PartialEq + fmt::Debug>(expected: &T, actual: &T) -> Self {
        if expected == actual {
            Self::Pass
        } else {
            Self::Fail {
                expected: format!("{expected:?}"),
                actual: format!("{actual:?}"),
            }
        }
    }

    /// Compares a fallible answer against the expectation.
    ///
    /// An error never matches.
    pub fn compare_result<T, E>(expected: &T, actual: Result<T, E>) -> Self
    where
        T: PartialEq + fmt::Debug,
        E: fmt::Display,
    {
        match actual {
            Ok(actual) => Self::compare(expected, &actual),
            Err(error) => Self::Fail {
                expected: format!("{expected:?}"),
                actual: format!("error: {error}"),
            },
        }
    }

    pub fn invalid(reason: impl fmt::Display) -> Self {
        Self::Invalid {
            reason: reason.to_string(),
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Running pass/fail counts over many cases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    /// Counts one outcome. Invalid cases count as failures.
    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.is_pass() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Returns `true` if no recorded case failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cases: {} passed, {} failed",
            self.total(),
            self.passed,
            self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_renders_both_sides() {
        assert_eq!(Outcome::compare(&vec![1, 2], &vec![1, 2]), Outcome::Pass);
        assert_eq!(
            Outcome::compare(&Some(3), &None),
            Outcome::Fail {
                expected: "Some(3)".into(),
                actual: "None".into(),
            }
        );
    }

    #[test]
    fn errors_never_match() {
        let actual: Result<u64, &str> = Err("no piles");
        assert_eq!(
            Outcome::compare_result(&4, actual),
            Outcome::Fail {
                expected: "4".into(),
                actual: "error: no piles".into(),
            }
        );
        assert!(Outcome::compare_result::<_, &str>(&4, Ok(4)).is_pass());
    }

    #[test]
    fn summary_counts_invalid_as_failed() {
        let mut summary = Summary::default();
        summary.record(&Outcome::Pass);
        summary.record(&Outcome::invalid("ragged grid"));
        summary.record(&Outcome::Pass);

        assert_eq!(summary, Summary { passed: 2, failed: 1 });
        assert!(!summary.all_passed());
        assert_eq!(summary.to_string(), "3 cases: 2 passed, 1 failed");
    }

    #[test]
    fn empty_summary_passes() {
        assert!(Summary::default().all_passed());
    }
}

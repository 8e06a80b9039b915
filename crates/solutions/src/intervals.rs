//! Exercises over sorted, non-overlapping intervals.

use drills_core::Interval;

/// Inserts `new` into a sorted list of non-overlapping intervals, merging
/// wherever it overlaps or touches an existing one.
///
/// The result is sorted and non-overlapping. Intervals entirely before `new`
/// are copied, those overlapping it are folded into it, and the rest are
/// copied after it.
#[must_use]
pub fn insert_interval(intervals: &[Interval], new: Interval) -> Vec<Interval> {
    let mut merged = Vec::with_capacity(intervals.len() + 1);
    let mut rest = intervals.iter().peekable();

    while let Some(interval) = rest.next_if(|interval| interval.end() < new.start()) {
        merged.push(*interval);
    }

    let mut current = new;
    while let Some(interval) = rest.next_if(|interval| interval.start() <= current.end()) {
        current = current.merge(interval);
    }
    merged.push(current);

    merged.extend(rest.copied());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn intervals(bounds: &[[i64; 2]]) -> Vec<Interval> {
        bounds
            .iter()
            .map(|&pair| Interval::try_from(pair).unwrap())
            .collect()
    }

    #[test]
    fn reference_cases() {
        assert_eq!(
            insert_interval(&intervals(&[[1, 3], [6, 9]]), Interval::new(2, 5).unwrap()),
            intervals(&[[1, 5], [6, 9]])
        );
        assert_eq!(
            insert_interval(
                &intervals(&[[1, 2], [3, 5], [6, 7], [8, 10], [12, 16]]),
                Interval::new(4, 8).unwrap()
            ),
            intervals(&[[1, 2], [3, 10], [12, 16]])
        );
    }

    #[test]
    fn into_empty_list() {
        assert_eq!(
            insert_interval(&[], Interval::new(5, 7).unwrap()),
            intervals(&[[5, 7]])
        );
    }

    #[test]
    fn at_either_end() {
        let existing = intervals(&[[3, 4], [6, 7]]);
        assert_eq!(
            insert_interval(&existing, Interval::new(0, 1).unwrap()),
            intervals(&[[0, 1], [3, 4], [6, 7]])
        );
        assert_eq!(
            insert_interval(&existing, Interval::new(9, 9).unwrap()),
            intervals(&[[3, 4], [6, 7], [9, 9]])
        );
    }

    #[test]
    fn touching_intervals_merge() {
        assert_eq!(
            insert_interval(&intervals(&[[1, 2], [5, 6]]), Interval::new(2, 5).unwrap()),
            intervals(&[[1, 6]])
        );
    }

    #[test]
    fn swallows_everything() {
        assert_eq!(
            insert_interval(&intervals(&[[2, 3], [4, 5]]), Interval::new(0, 10).unwrap()),
            intervals(&[[0, 10]])
        );
    }

    prop_compose! {
        fn arb_sorted_disjoint()(
            gaps in prop::collection::vec((1i64..5, 0i64..5), 0..8)
        ) -> Vec<Interval> {
            let mut cursor = -20;
            gaps.into_iter()
                .map(|(gap, width)| {
                    let start = cursor + gap;
                    cursor = start + width;
                    Interval::new(start, cursor).unwrap()
                })
                .collect()
        }
    }

    proptest! {
        #[test]
        fn result_is_sorted_disjoint_and_covers_input(
            existing in arb_sorted_disjoint(),
            start in -25i64..40,
            width in 0i64..10,
        ) {
            let new = Interval::new(start, start + width).unwrap();
            let merged = insert_interval(&existing, new);

            for pair in merged.windows(2) {
                prop_assert!(pair[0].end() < pair[1].start());
            }
            for interval in existing.iter().chain(std::iter::once(&new)) {
                let covered = merged
                    .iter()
                    .any(|m| m.start() <= interval.start() && interval.end() <= m.end());
                prop_assert!(covered);
            }
        }
    }
}

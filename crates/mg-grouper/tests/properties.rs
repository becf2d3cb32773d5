//! Property-based tests using proptest.

use mg_grouper::{expand, group_monotonic, Group, GroupMonotonicSlice, Run, Runs};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Sorted-ish integer sequences with a mix of runs and gaps.
fn sequence_strategy() -> impl Strategy<Value = Vec<i64>> {
    (any::<i16>(), prop::collection::vec(0i64..4, 0..64)).prop_map(|(start, steps)| {
        let mut current = i64::from(start);
        let mut values = vec![current];
        for step in steps {
            current += step;
            values.push(current);
        }
        values
    })
}

/// Sequences with no two adjacent values consecutive.
fn gapped_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(2i64..10, 1..40).prop_map(|gaps| {
        let mut current = 0;
        gaps.into_iter()
            .map(|g| {
                current += g;
                current
            })
            .collect()
    })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_expansion_is_input_minus_first(values in sequence_strategy(), min in 1usize..6) {
        let groups = values.group_monotonic(min).unwrap();
        let expanded: Vec<i64> = expand(groups).collect();
        prop_assert_eq!(expanded, values[1..].to_vec());
    }

    #[test]
    fn prop_no_runs_means_tail_as_singles(values in gapped_strategy(), min in 2usize..6) {
        let groups = values.group_monotonic(min).unwrap();
        let expected: Vec<Group<i64>> = values[1..].iter().copied().map(Group::Single).collect();
        prop_assert_eq!(groups, expected);
    }

    #[test]
    fn prop_ranges_only_for_long_runs(values in sequence_strategy(), min in 1usize..6) {
        let runs: Vec<Run<i64>> = Runs::new(values.iter().copied()).collect();
        let groups: Vec<Group<i64>> = group_monotonic(values.iter().copied(), min).unwrap().collect();
        let qualifying = runs.iter().filter(|r| r.len >= min).count();
        let leading_vanishes = runs.first().is_some_and(|r| r.len == 1 && min == 1);
        let ranges = groups.iter().filter(|g| g.is_range()).count();
        prop_assert_eq!(ranges, qualifying - usize::from(leading_vanishes));
    }

    #[test]
    fn prop_runs_are_maximal(values in sequence_strategy()) {
        let runs: Vec<Run<i64>> = Runs::new(values.iter().copied()).collect();
        prop_assert_eq!(runs.iter().map(|r| r.len).sum::<usize>(), values.len());
        for pair in runs.windows(2) {
            prop_assert_ne!(pair[0].last + 1, pair[1].first);
        }
        for run in &runs {
            prop_assert_eq!(run.last - run.first + 1, run.len as i64);
        }
    }

    #[test]
    fn prop_threshold_boundary(start in -1000i64..1000, min in 2usize..8) {
        // A run of exactly `min` after a non-adjacent head collapses.
        let mut exact = vec![start - 10];
        exact.extend((0..min as i64).map(|i| start + i));
        prop_assert_eq!(
            exact.group_monotonic(min).unwrap(),
            vec![Group::Range { first: start, last: start + min as i64 - 1 }]
        );

        // One shorter stays as singles.
        exact.pop();
        let groups = exact.group_monotonic(min).unwrap();
        prop_assert_eq!(groups.len(), min - 1);
        prop_assert!(groups.iter().all(|g| !g.is_range()));
    }
}

//! End-to-end grouping scenarios through the public API.

use chrono::NaiveDate;
use mg_grouper::{compact, expand, Group, GroupMonotonicSlice, GrouperError, RangeCompactor, Value};

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::from).collect()
}

fn render(groups: &[Group<Value>]) -> Vec<String> {
    groups.iter().map(ToString::to_string).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ========== Integer scenarios ==========

#[test]
fn test_two_ranges() {
    let groups = compact(&ints(&[1, 2, 3, 4, 5, 10, 11, 12]), 3).unwrap();
    assert_eq!(render(&groups), vec!["2..5", "10..12"]);
}

#[test]
fn test_ranges_and_singles() {
    let groups = compact(&ints(&[1, 2, 3, 4, 7, 9, 10, 11, 12]), 3).unwrap();
    assert_eq!(render(&groups), vec!["2..4", "7", "9..12"]);
}

#[test]
fn test_threshold_two() {
    let groups = compact(&ints(&[1, 2, 3, 5, 6, 8]), 2).unwrap();
    assert_eq!(render(&groups), vec!["2..3", "5..6", "8"]);
}

#[test]
fn test_no_consecutive_values() {
    let groups = compact(&ints(&[1, 3, 5, 7, 9]), 3).unwrap();
    assert_eq!(render(&groups), vec!["3", "5", "7", "9"]);
    assert!(groups.iter().all(|g| !g.is_range()));
}

#[test]
fn test_ten_thousand_values() {
    let values: Vec<i64> = (1..=10_000).collect();
    let groups = values.group_monotonic(3).unwrap();
    assert_eq!(groups, vec![Group::Range { first: 2, last: 10_000 }]);
}

// ========== Dates and characters ==========

#[test]
fn test_dates_with_gap() {
    let values: Vec<Value> = [
        date(2024, 1, 1),
        date(2024, 1, 2),
        date(2024, 1, 3),
        date(2024, 1, 5),
        date(2024, 1, 6),
        date(2024, 1, 7),
        date(2024, 1, 8),
    ]
    .into_iter()
    .map(Value::from)
    .collect();
    let groups = compact(&values, 3).unwrap();
    assert_eq!(render(&groups), vec!["2024-01-02..2024-01-03", "2024-01-05..2024-01-08"]);
}

#[test]
fn test_characters() {
    let values: Vec<Value> = "abcdfgh".chars().map(Value::from).collect();
    let groups = compact(&values, 3).unwrap();
    assert_eq!(render(&groups), vec!["b..d", "f..h"]);
}

// ========== Errors ==========

#[test]
fn test_errors_are_distinguishable() {
    let mixed = vec![Value::Integer(1), Value::Integer(2), Value::Character('s'), Value::Integer(4)];
    let errors = [
        compact(&mixed, 3).unwrap_err(),
        compact(&ints(&[1, 2]), 0).unwrap_err(),
        RangeCompactor::default().compact_json("[{}]").unwrap_err(),
    ];
    assert!(matches!(errors[0], GrouperError::TypeMismatch { index: 2, .. }));
    assert!(matches!(errors[1], GrouperError::InvalidArgument { min_run_size: 0 }));
    assert!(matches!(errors[2], GrouperError::UnsupportedType { .. }));
}

#[test]
fn test_coverage_matches_input_tail() {
    let input = ints(&[5, 6, 7, 9, 11, 12, 13, 14, 20]);
    let groups = compact(&input, 3).unwrap();
    let covered: Vec<Value> = expand(groups).collect();
    assert_eq!(covered, input[1..].to_vec());
}

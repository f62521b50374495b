//! Stable sort tests for sticktable
//!
//! Exercises the explicit key-extraction strategies, the direction
//! conventions, and stability under both directions.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use serde_json::{json, Value};
use sticktable::sort::{order_by, SortBy, SortField, SortOrder};
use test_case::test_case;

fn people() -> Vec<Value> {
    vec![
        json!({"name": "dora", "dept": "eng", "seniority": 3, "marker": 0}),
        json!({"name": "avi", "dept": "ops", "seniority": 1, "marker": 1}),
        json!({"name": "bea", "dept": "eng", "seniority": 3, "marker": 2}),
        json!({"name": "cal", "dept": "eng", "seniority": 2, "marker": 3}),
    ]
}

fn names(rows: &[Value]) -> Vec<&str> {
    rows.iter().map(|r| r["name"].as_str().unwrap()).collect()
}

#[test_case(SortOrder::Ascending, &["avi", "bea", "cal", "dora"]; "ascending")]
#[test_case(SortOrder::Descending, &["dora", "cal", "bea", "avi"]; "descending")]
fn single_key_sort(order: SortOrder, expected: &[&str]) {
    let sorted = order_by(people(), Some(&SortBy::Key("name".to_string())), order);
    assert_eq!(names(&sorted), expected);
}

#[test_case(SortOrder::Ascending; "ascending ties")]
#[test_case(SortOrder::Descending; "descending ties")]
fn equal_keys_preserve_marker_order(order: SortOrder) {
    let by = SortBy::Key("seniority".to_string());
    let sorted = order_by(people(), Some(&by), order);
    let tied_markers: Vec<i64> = sorted
        .iter()
        .filter(|r| r["seniority"] == json!(3))
        .map(|r| r["marker"].as_i64().unwrap())
        .collect();
    assert_eq!(tied_markers, [0, 2]);
}

#[test]
fn empty_input_stays_empty() {
    let by = SortBy::Key("name".to_string());
    assert!(order_by(Vec::new(), Some(&by), SortOrder::Ascending).is_empty());
}

#[test]
fn no_criteria_is_identity() {
    let input = people();
    assert_eq!(order_by(input.clone(), None, SortOrder::Descending), input);
    let empty_fields = SortBy::Fields(Vec::new());
    assert_eq!(
        order_by(input.clone(), Some(&empty_fields), SortOrder::Ascending),
        input
    );
}

#[test]
fn composite_fields_break_ties_in_order() {
    let by = SortBy::Fields(vec![
        SortField::path("dept"),
        SortField::path("seniority"),
        SortField::path("name"),
    ]);
    let sorted = order_by(people(), Some(&by), SortOrder::Ascending);
    assert_eq!(names(&sorted), ["cal", "bea", "dora", "avi"]);
}

#[test]
fn extractor_fields_receive_the_original_index() {
    // Sort by a key derived from the original index: reverses the input.
    // Keys stay well inside f64's exact-integer range, matching how
    // values are compared numerically.
    let by = SortBy::Fields(vec![SortField::extract(|_, index| {
        json!(1000 - i64::try_from(index).unwrap_or(0))
    })]);
    let sorted = order_by(people(), Some(&by), SortOrder::Ascending);
    assert_eq!(names(&sorted), ["cal", "bea", "avi", "dora"]);
}

#[test]
fn comparator_receives_raw_rows() {
    let by = SortBy::Comparator(Box::new(|a, b| {
        let a = a["seniority"].as_i64().unwrap_or(0);
        let b = b["seniority"].as_i64().unwrap_or(0);
        a.cmp(&b)
    }));
    let sorted = order_by(people(), Some(&by), SortOrder::Descending);
    assert_eq!(sorted[0]["seniority"], json!(3));
    assert_eq!(sorted[3]["seniority"], json!(1));
}

#[test]
fn missing_sort_field_compares_as_null() {
    let rows = vec![
        json!({"name": "x", "score": 2}),
        json!({"name": "y"}),
        json!({"name": "z", "score": 1}),
    ];
    // Nulls compare equal to everything, so rows keep relative order except
    // where real values decide.
    let by = SortBy::Key("score".to_string());
    let sorted = order_by(rows, Some(&by), SortOrder::Ascending);
    assert_eq!(sorted.len(), 3);
}

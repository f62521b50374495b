//! Fixation resolver tests for sticktable
//!
//! Covers the left/right fixation rules against the cached leaf counts,
//! grouped-header spans, and the documented end-to-end scenario with five
//! leaf columns.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use sticktable::layout::{fixed_column_offset, fixed_span};
use sticktable::{CellOffset, Column, ColumnLayout, FixedSide};

// ============================================================================
// Test Helpers
// ============================================================================

fn leaf(id: &str, width: f64, fixed: Option<FixedSide>) -> Column {
    Column {
        id: id.to_string(),
        width: Some(width),
        fixed,
        ..Column::default()
    }
}

/// Five leaf columns, widths [50, 100, 75, 60, 90], two left-fixed and one
/// right-fixed.
fn five_column_layout() -> ColumnLayout {
    ColumnLayout::new(vec![
        leaf("a", 50.0, Some(FixedSide::Left)),
        leaf("b", 100.0, Some(FixedSide::Left)),
        leaf("c", 75.0, None),
        leaf("d", 60.0, None),
        leaf("e", 90.0, Some(FixedSide::Right)),
    ])
}

// ============================================================================
// Fixation rules
// ============================================================================

#[test]
fn left_fixation_matches_leaf_count() {
    let layout = five_column_layout();
    assert_eq!(layout.fixed_leaf_count(), 2);
    for index in 0..layout.leaf_count() {
        let fixed = fixed_span(index, Some(FixedSide::Left), &layout, None).is_some();
        assert_eq!(fixed, index < layout.fixed_leaf_count(), "index {index}");
    }
}

#[test]
fn right_fixation_counts_from_the_end() {
    let layout = five_column_layout();
    assert_eq!(layout.right_fixed_leaf_count(), 1);
    for index in 0..layout.leaf_count() {
        let fixed = fixed_span(index, Some(FixedSide::Right), &layout, None).is_some();
        let expected = index >= layout.leaf_count() - layout.right_fixed_leaf_count();
        assert_eq!(fixed, expected, "index {index}");
    }
}

#[test]
fn sibling_group_spans_are_contiguous_and_disjoint() {
    // Grouped header: [a] [g: g1 g2] [h: h1 h2] with all five leaves fixed left.
    let leaves = vec![
        leaf("a", 40.0, Some(FixedSide::Left)),
        leaf("g1", 40.0, Some(FixedSide::Left)),
        leaf("g2", 40.0, Some(FixedSide::Left)),
        leaf("h1", 40.0, Some(FixedSide::Left)),
        leaf("h2", 40.0, Some(FixedSide::Left)),
    ];
    let layout = ColumnLayout::new(leaves.clone());
    let groups = vec![
        leaves[0].clone(),
        Column {
            id: "g".to_string(),
            children: vec![leaves[1].clone(), leaves[2].clone()],
            ..Column::default()
        },
        Column {
            id: "h".to_string(),
            children: vec![leaves[3].clone(), leaves[4].clone()],
            ..Column::default()
        },
    ];

    let spans: Vec<(usize, usize)> = (0..groups.len())
        .map(|i| {
            let span = fixed_span(i, Some(FixedSide::Left), &layout, Some(&groups)).unwrap();
            (span.start, span.after)
        })
        .collect();

    assert_eq!(spans, vec![(0, 0), (1, 2), (3, 4)]);
    // Each span begins right after the previous one ends.
    for pair in spans.windows(2) {
        assert_eq!(pair[0].1 + 1, pair[1].0);
    }
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn five_column_scenario() {
    let layout = five_column_layout();

    let span = fixed_span(0, Some(FixedSide::Left), &layout, None).unwrap();
    assert_eq!(span.direction, FixedSide::Left);
    assert_eq!((span.start, span.after), (0, 0));

    let span = fixed_span(4, Some(FixedSide::Right), &layout, None).unwrap();
    assert_eq!(span.direction, FixedSide::Right);
    assert_eq!((span.start, span.after), (4, 4));

    assert_eq!(
        fixed_column_offset(1, Some(FixedSide::Left), &layout, None, false),
        Some(CellOffset::Left(50.0))
    );
    assert_eq!(
        fixed_column_offset(4, Some(FixedSide::Right), &layout, None, true),
        Some(CellOffset::Right(6.0))
    );
}

#[test]
fn body_context_falls_through_left_then_right() {
    let layout = five_column_layout();
    assert_eq!(
        fixed_span(1, None, &layout, None).unwrap().direction,
        FixedSide::Left
    );
    assert_eq!(
        fixed_span(4, None, &layout, None).unwrap().direction,
        FixedSide::Right
    );
    for index in 2..4 {
        assert!(fixed_span(index, None, &layout, None).is_none());
    }
}

#[test]
fn no_fixed_columns_means_nothing_sticks() {
    let layout = ColumnLayout::new(vec![
        leaf("a", 50.0, None),
        leaf("b", 50.0, None),
        leaf("c", 50.0, None),
    ]);
    for index in 0..layout.leaf_count() {
        assert!(fixed_span(index, None, &layout, None).is_none());
        assert!(fixed_column_offset(index, None, &layout, None, true).is_none());
    }
}

//! Column fixation resolver.
//!
//! Decides whether a column (or column group, for grouped headers) is pinned
//! to a table edge, and the inclusive leaf span it covers in flattened
//! coordinate space.

use crate::types::{Column, ColumnLayout, FixedSide, FixedSpan};

/// Resolve the fixation of the column at `index`.
///
/// Without a group context the span is degenerate (`start == after ==
/// index`). With `group_columns` (the original, possibly grouped, column
/// list parallel to the layout's flattened leaves) the group at `index` is
/// flattened to its leaf descendants and the span is the `col_span`-weighted
/// range those leaves occupy.
///
/// `fixed_side` is the caller's fixation context: a header rendered inside a
/// fixed region passes its side, body cells pass `None` and both rules are
/// evaluated (left first).
///
/// Returns `None` when the span is not entirely inside a fixed region; a
/// group straddling the fixed boundary is reported unfixed. That layout is a
/// caller configuration error and is not validated here.
#[must_use]
pub fn fixed_span(
    index: usize,
    fixed_side: Option<FixedSide>,
    layout: &ColumnLayout,
    group_columns: Option<&[Column]>,
) -> Option<FixedSpan> {
    let (start, after) = match group_columns {
        Some(groups) => group_bounds(groups.get(index)?, layout)?,
        None => (index, index),
    };

    let left = after < layout.fixed_leaf_count();
    // Written as an addition so an oversized right count cannot underflow.
    let right = start + layout.right_fixed_leaf_count() >= layout.leaf_count();

    let direction = match fixed_side {
        Some(FixedSide::Left) => left.then_some(FixedSide::Left),
        Some(FixedSide::Right) => right.then_some(FixedSide::Right),
        None => {
            if left {
                Some(FixedSide::Left)
            } else if right {
                Some(FixedSide::Right)
            } else {
                None
            }
        }
    }?;

    Some(FixedSpan {
        direction,
        start,
        after,
    })
}

/// Leaf-span bounds of a column group: `start` is the `col_span` sum of all
/// layout leaves strictly before the group's first leaf, `after` the last
/// slot the group's own leaves occupy.
fn group_bounds(group: &Column, layout: &ColumnLayout) -> Option<(usize, usize)> {
    let leaves = group.leaves();
    let first = leaves.first()?;
    let position = layout.columns().iter().position(|c| c.id == first.id)?;

    let start: usize = layout
        .columns()
        .iter()
        .take(position)
        .map(|c| c.col_span)
        .sum();
    let span: usize = leaves.iter().map(|c| c.col_span).sum();

    Some((start, (start + span).saturating_sub(1)))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    fn leaf(id: &str, fixed: Option<FixedSide>) -> Column {
        Column {
            id: id.to_string(),
            fixed,
            ..Column::default()
        }
    }

    fn five_column_layout() -> ColumnLayout {
        ColumnLayout::new(vec![
            leaf("a", Some(FixedSide::Left)),
            leaf("b", Some(FixedSide::Left)),
            leaf("c", None),
            leaf("d", None),
            leaf("e", Some(FixedSide::Right)),
        ])
    }

    #[test]
    fn test_left_rule() {
        let layout = five_column_layout();
        for index in 0..layout.leaf_count() {
            let span = fixed_span(index, Some(FixedSide::Left), &layout, None);
            if index < layout.fixed_leaf_count() {
                let span = span.unwrap();
                assert_eq!(span.direction, FixedSide::Left);
                assert_eq!((span.start, span.after), (index, index));
            } else {
                assert!(span.is_none());
            }
        }
    }

    #[test]
    fn test_right_rule() {
        let layout = five_column_layout();
        for index in 0..layout.leaf_count() {
            let span = fixed_span(index, Some(FixedSide::Right), &layout, None);
            if index >= layout.leaf_count() - layout.right_fixed_leaf_count() {
                assert_eq!(span.unwrap().direction, FixedSide::Right);
            } else {
                assert!(span.is_none());
            }
        }
    }

    #[test]
    fn test_default_context_checks_left_then_right() {
        let layout = five_column_layout();
        assert_eq!(
            fixed_span(0, None, &layout, None).unwrap().direction,
            FixedSide::Left
        );
        assert_eq!(
            fixed_span(4, None, &layout, None).unwrap().direction,
            FixedSide::Right
        );
        assert!(fixed_span(2, None, &layout, None).is_none());
    }

    #[test]
    fn test_group_span_covers_all_leaves() {
        // Leaves: a, b1, b2, c — group `b` covers slots 1..=2.
        let layout = ColumnLayout::from_parts(
            vec![
                leaf("a", Some(FixedSide::Left)),
                leaf("b1", Some(FixedSide::Left)),
                leaf("b2", Some(FixedSide::Left)),
                leaf("c", None),
            ],
            3,
            0,
        );
        let groups = vec![
            leaf("a", Some(FixedSide::Left)),
            Column {
                id: "b".to_string(),
                children: vec![
                    leaf("b1", Some(FixedSide::Left)),
                    leaf("b2", Some(FixedSide::Left)),
                ],
                ..Column::default()
            },
            leaf("c", None),
        ];

        let span = fixed_span(1, Some(FixedSide::Left), &layout, Some(&groups)).unwrap();
        assert_eq!((span.start, span.after), (1, 2));
        assert_eq!(span.direction, FixedSide::Left);
    }

    #[test]
    fn test_group_straddling_boundary_is_unfixed() {
        // Only the first leaf is inside the fixed region.
        let layout = ColumnLayout::from_parts(
            vec![leaf("a1", None), leaf("a2", None), leaf("b", None)],
            1,
            0,
        );
        let groups = vec![
            Column {
                id: "a".to_string(),
                children: vec![leaf("a1", None), leaf("a2", None)],
                ..Column::default()
            },
            leaf("b", None),
        ];
        assert!(fixed_span(0, Some(FixedSide::Left), &layout, Some(&groups)).is_none());
    }

    #[test]
    fn test_col_span_weighted_bounds() {
        let wide = Column {
            id: "a".to_string(),
            col_span: 2,
            ..Column::default()
        };
        let layout = ColumnLayout::from_parts(vec![wide.clone(), leaf("b", None)], 3, 0);
        let groups = vec![wide, leaf("b", None)];

        // `b` starts after the two slots occupied by `a`.
        let span = fixed_span(1, Some(FixedSide::Left), &layout, Some(&groups)).unwrap();
        assert_eq!((span.start, span.after), (2, 2));
    }

    #[test]
    fn test_unknown_group_index_is_unfixed() {
        let layout = five_column_layout();
        let groups = vec![leaf("a", Some(FixedSide::Left))];
        assert!(fixed_span(7, Some(FixedSide::Left), &layout, Some(&groups)).is_none());
    }
}

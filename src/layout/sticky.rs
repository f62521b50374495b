//! Sticky class/offset/style derivation.
//!
//! Turns a fixation result into the CSS a cell needs to stay anchored while
//! the body scrolls: marker classes, a static pixel offset, or an
//! engine-aware sticky style. All derivations are pure functions of the
//! column snapshot; nothing here caches or mutates.

use crate::types::{
    CellOffset, Column, ColumnLayout, FixedSide, FixedSpan, StickyCellStyle, FIRST_FIXED_CLASS,
    FIXED_LEFT_CLASS, FIXED_RIGHT_CLASS, LAST_FIXED_CLASS, SCROLL_LEFT_VAR, SCROLL_RIGHT_VAR,
};

use super::fixed_span;

/// Width reserved for a vertical scrollbar track, in pixels.
pub const GUTTER_WIDTH: f64 = 6.0;

/// Classes marking a fixed cell and, on the outermost fixed cell of each
/// side, the boundary divider.
///
/// `offset` shifts the boundary comparison for callers rendering a cell
/// displaced from its configured slot (e.g. an expand toggle prefix).
#[must_use]
pub fn fixed_columns_class(
    index: usize,
    fixed_side: Option<FixedSide>,
    layout: &ColumnLayout,
    group_columns: Option<&[Column]>,
    offset: usize,
) -> Vec<&'static str> {
    let mut classes = Vec::new();
    let Some(span) = fixed_span(index, fixed_side, layout, group_columns) else {
        return classes;
    };

    match span.direction {
        FixedSide::Left => {
            classes.push(FIXED_LEFT_CLASS);
            if span.after + offset + 1 == layout.fixed_leaf_count() {
                classes.push(LAST_FIXED_CLASS);
            }
        }
        FixedSide::Right => {
            classes.push(FIXED_RIGHT_CLASS);
            let boundary = layout
                .leaf_count()
                .checked_sub(layout.right_fixed_leaf_count());
            if boundary.is_some() && span.start.checked_sub(offset) == boundary {
                classes.push(FIRST_FIXED_CLASS);
            }
        }
    }
    classes
}

/// Static pixel offset of a fixed cell from its table edge, or `None` when
/// the cell is unfixed. Used by the native-sticky path and by hosts that
/// position fixed cells themselves.
#[must_use]
pub fn fixed_column_offset(
    index: usize,
    fixed_side: Option<FixedSide>,
    layout: &ColumnLayout,
    group_columns: Option<&[Column]>,
    has_gutter: bool,
) -> Option<CellOffset> {
    let span = fixed_span(index, fixed_side, layout, group_columns)?;
    Some(span_offset(&span, layout, has_gutter))
}

/// Engine-aware sticky style for one cell.
///
/// On engines with reliable composited transforms (`composited`), fixed
/// cells are positioned by a GPU-composited `translate3d` driven by the
/// host-maintained `--scroll-left`/`--scroll-right` custom properties, so no
/// per-cell style changes during scroll. On other engines the cell falls
/// back to native `position: sticky` with an explicit pixel offset.
#[must_use]
pub fn sticky_cell_style(
    index: usize,
    fixed_side: Option<FixedSide>,
    layout: &ColumnLayout,
    group_columns: Option<&[Column]>,
    has_gutter: bool,
    composited: bool,
) -> StickyCellStyle {
    let mut style = StickyCellStyle::default();
    let Some(span) = fixed_span(index, fixed_side, layout, group_columns) else {
        // Clear any containment hint left from a previously fixed state.
        style.contain = Some(String::new());
        return style;
    };

    style.z_index = Some("4".to_string());
    if composited {
        style.contain = Some("layout".to_string());
        style.transform_style = Some("preserve-3d".to_string());
        style.transform = Some(match span.direction {
            FixedSide::Left => format!("translate3d(var({SCROLL_LEFT_VAR}), 0, 0)"),
            FixedSide::Right => format!("translate3d(var({SCROLL_RIGHT_VAR}), 0, 0)"),
        });
    } else {
        style.position = Some("sticky".to_string());
        match span_offset(&span, layout, has_gutter) {
            CellOffset::Left(v) => style.left = Some(format_px(v)),
            CellOffset::Right(v) => style.right = Some(format_px(v)),
        }
    }
    style
}

/// Rewrite a finite `left`/`right` pixel value as an equivalent `translateX`
/// transform — an alternate positioning strategy for hosts that move fixed
/// cells themselves instead of relying on sticky positioning.
pub fn ensure_position(style: &mut StickyCellStyle, side: FixedSide) {
    let value = match side {
        FixedSide::Left => style.left.as_deref(),
        FixedSide::Right => style.right.as_deref(),
    };
    let Some(px) = value.and_then(parse_px) else {
        return;
    };
    style.transform = Some(match side {
        FixedSide::Left => format!("translateX({px}px)"),
        FixedSide::Right => format!("translateX(-{px}px)"),
    });
}

fn span_offset(span: &FixedSpan, layout: &ColumnLayout, has_gutter: bool) -> CellOffset {
    let columns = layout.columns();
    match span.direction {
        FixedSide::Left => {
            let end = span.start.min(columns.len());
            CellOffset::Left(width_sum(columns.get(..end).unwrap_or(columns)))
        }
        FixedSide::Right => {
            let from = (span.after + 1).min(columns.len());
            let mut right = width_sum(columns.get(from..).unwrap_or(&[]));
            if has_gutter {
                right += GUTTER_WIDTH;
            }
            CellOffset::Right(right)
        }
    }
}

fn width_sum(columns: &[Column]) -> f64 {
    columns.iter().map(Column::resolved_width).sum()
}

fn format_px(value: f64) -> String {
    // An empty width sum yields -0.0; adding positive zero renders it as "0px".
    let value = value + 0.0;
    format!("{value}px")
}

fn parse_px(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    number.parse::<f64>().ok().filter(|v| v.is_finite())
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

    fn column(id: &str, width: f64, fixed: Option<FixedSide>) -> Column {
        Column {
            id: id.to_string(),
            width: Some(width),
            fixed,
            ..Column::default()
        }
    }

    fn layout() -> ColumnLayout {
        // Widths [50, 100, 75, 60, 90], two left-fixed, one right-fixed.
        ColumnLayout::new(vec![
            column("a", 50.0, Some(FixedSide::Left)),
            column("b", 100.0, Some(FixedSide::Left)),
            column("c", 75.0, None),
            column("d", 60.0, None),
            column("e", 90.0, Some(FixedSide::Right)),
        ])
    }

    #[test]
    fn test_boundary_classes() {
        let layout = layout();
        assert_eq!(
            fixed_columns_class(0, Some(FixedSide::Left), &layout, None, 0),
            vec![FIXED_LEFT_CLASS]
        );
        assert_eq!(
            fixed_columns_class(1, Some(FixedSide::Left), &layout, None, 0),
            vec![FIXED_LEFT_CLASS, LAST_FIXED_CLASS]
        );
        assert_eq!(
            fixed_columns_class(4, Some(FixedSide::Right), &layout, None, 0),
            vec![FIXED_RIGHT_CLASS, FIRST_FIXED_CLASS]
        );
        assert!(fixed_columns_class(2, None, &layout, None, 0).is_empty());
    }

    #[test]
    fn test_offset_accumulates_widths() {
        let layout = layout();
        assert_eq!(
            fixed_column_offset(0, Some(FixedSide::Left), &layout, None, false),
            Some(CellOffset::Left(0.0))
        );
        assert_eq!(
            fixed_column_offset(1, Some(FixedSide::Left), &layout, None, false),
            Some(CellOffset::Left(50.0))
        );
        assert_eq!(
            fixed_column_offset(4, Some(FixedSide::Right), &layout, None, false),
            Some(CellOffset::Right(0.0))
        );
        assert_eq!(
            fixed_column_offset(4, Some(FixedSide::Right), &layout, None, true),
            Some(CellOffset::Right(GUTTER_WIDTH))
        );
        assert_eq!(
            fixed_column_offset(2, None, &layout, None, false),
            None
        );
    }

    #[test]
    fn test_real_width_takes_precedence() {
        let mut cols = vec![
            column("a", 50.0, Some(FixedSide::Left)),
            column("b", 100.0, Some(FixedSide::Left)),
        ];
        cols[0].real_width = Some(64.0);
        let layout = ColumnLayout::new(cols);
        assert_eq!(
            fixed_column_offset(1, Some(FixedSide::Left), &layout, None, false),
            Some(CellOffset::Left(64.0))
        );
    }

    #[test]
    fn test_nan_real_width_falls_back() {
        let mut cols = vec![
            column("a", 50.0, Some(FixedSide::Left)),
            column("b", 100.0, Some(FixedSide::Left)),
        ];
        cols[0].real_width = Some(f64::NAN);
        let layout = ColumnLayout::new(cols);
        assert_eq!(
            fixed_column_offset(1, Some(FixedSide::Left), &layout, None, false),
            Some(CellOffset::Left(50.0))
        );
    }

    #[test]
    fn test_composited_style_uses_scroll_vars() {
        let layout = layout();
        let style = sticky_cell_style(0, Some(FixedSide::Left), &layout, None, false, true);
        assert_eq!(style.z_index.as_deref(), Some("4"));
        assert_eq!(style.contain.as_deref(), Some("layout"));
        assert_eq!(style.transform_style.as_deref(), Some("preserve-3d"));
        assert_eq!(
            style.transform.as_deref(),
            Some("translate3d(var(--scroll-left), 0, 0)")
        );
        assert!(style.position.is_none());
        assert!(style.left.is_none());

        let style = sticky_cell_style(4, Some(FixedSide::Right), &layout, None, false, true);
        assert_eq!(
            style.transform.as_deref(),
            Some("translate3d(var(--scroll-right), 0, 0)")
        );
    }

    #[test]
    fn test_native_sticky_style_has_pixel_offset() {
        let layout = layout();
        let style = sticky_cell_style(1, Some(FixedSide::Left), &layout, None, false, false);
        assert_eq!(style.position.as_deref(), Some("sticky"));
        assert_eq!(style.left.as_deref(), Some("50px"));
        assert!(style.transform.is_none());

        let style = sticky_cell_style(4, Some(FixedSide::Right), &layout, None, true, false);
        assert_eq!(style.right.as_deref(), Some("6px"));
    }

    #[test]
    fn test_zero_offsets_render_without_sign() {
        // Summing an empty width slice produces -0.0; the rendered
        // offset must still read "0px" on both edges.
        let layout = layout();
        let style = sticky_cell_style(0, Some(FixedSide::Left), &layout, None, false, false);
        assert_eq!(style.left.as_deref(), Some("0px"));

        let style = sticky_cell_style(4, Some(FixedSide::Right), &layout, None, false, false);
        assert_eq!(style.right.as_deref(), Some("0px"));
    }

    #[test]
    fn test_unfixed_style_clears_containment() {
        let layout = layout();
        let style = sticky_cell_style(2, None, &layout, None, false, true);
        assert_eq!(style.contain.as_deref(), Some(""));
        assert!(style.z_index.is_none());
        assert!(style.transform.is_none());
    }

    #[test]
    fn test_ensure_position_rewrites_as_transform() {
        let mut style = StickyCellStyle {
            left: Some("50px".to_string()),
            ..StickyCellStyle::default()
        };
        ensure_position(&mut style, FixedSide::Left);
        assert_eq!(style.transform.as_deref(), Some("translateX(50px)"));

        let mut style = StickyCellStyle {
            right: Some("6px".to_string()),
            ..StickyCellStyle::default()
        };
        ensure_position(&mut style, FixedSide::Right);
        assert_eq!(style.transform.as_deref(), Some("translateX(-6px)"));

        // Non-numeric values are left alone.
        let mut style = StickyCellStyle {
            left: Some("auto".to_string()),
            ..StickyCellStyle::default()
        };
        ensure_position(&mut style, FixedSide::Left);
        assert!(style.transform.is_none());
    }
}

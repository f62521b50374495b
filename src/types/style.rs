use serde::Serialize;

use super::FixedSide;

/// Class marking a left-fixed cell.
pub const FIXED_LEFT_CLASS: &str = "fixed-column--left";
/// Class marking a right-fixed cell.
pub const FIXED_RIGHT_CLASS: &str = "fixed-column--right";
/// Class marking the outermost left-fixed cell (divider/shadow anchor).
pub const LAST_FIXED_CLASS: &str = "is-last-column";
/// Class marking the outermost right-fixed cell (divider/shadow anchor).
pub const FIRST_FIXED_CLASS: &str = "is-first-column";

/// CSS custom property the host updates with the horizontal scroll offset.
pub const SCROLL_LEFT_VAR: &str = "--scroll-left";
/// CSS custom property the host updates with the negated scroll offset.
pub const SCROLL_RIGHT_VAR: &str = "--scroll-right";

/// Pixel offset of a fixed cell from its table edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellOffset {
    /// Distance from the table's left edge.
    Left(f64),
    /// Distance from the table's right edge (gutter included when reserved).
    Right(f64),
}

impl CellOffset {
    /// The offset value in pixels.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Left(v) | Self::Right(v) => v,
        }
    }

    /// Which edge the offset is measured from.
    #[must_use]
    pub fn side(self) -> FixedSide {
        match self {
            Self::Left(_) => FixedSide::Left,
            Self::Right(_) => FixedSide::Right,
        }
    }
}

/// Inline style of one sticky cell.
///
/// Unset fields are skipped when handed to the host; `contain` is set to the
/// empty string on unfixed cells to clear a stale containment hint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StickyCellStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

impl StickyCellStyle {
    /// Set fields as CSS property/value pairs, for merging into a host style
    /// map.
    #[must_use]
    pub fn css_entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        let fields: [(&'static str, &Option<String>); 7] = [
            ("z-index", &self.z_index),
            ("contain", &self.contain),
            ("transform-style", &self.transform_style),
            ("transform", &self.transform),
            ("position", &self.position),
            ("left", &self.left),
            ("right", &self.right),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                entries.push((name, value.clone()));
            }
        }
        entries
    }
}

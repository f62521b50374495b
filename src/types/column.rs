use serde::{Deserialize, Serialize};

/// Side of the table a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedSide {
    Left,
    Right,
}

impl FixedSide {
    /// Parse the host-side string form (`"left"` / `"right"`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// The string form used in class names and the JS config.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// One column of the host table.
///
/// A column with `children` is a grouped header spanning its leaf
/// descendants; a column with no children is a leaf, the unit of
/// width and fixation accounting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Column {
    /// Unique column id.
    pub id: String,
    /// Data field (dot path) this column renders; used by footer aggregation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    /// Configured width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Measured width in pixels; non-finite values are treated as unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_width: Option<f64>,
    /// Which edge the column is pinned to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<FixedSide>,
    /// Number of leaf slots this column occupies (>= 1).
    pub col_span: usize,
    /// Sub-columns for grouped headers; empty for leaf columns.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Column>,
    /// Text alignment class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    /// Extra class applied to body cells.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Extra class applied to header/footer cells.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_class_name: Option<String>,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            id: String::new(),
            property: None,
            width: None,
            real_width: None,
            fixed: None,
            col_span: 1,
            children: Vec::new(),
            align: None,
            class_name: None,
            label_class_name: None,
        }
    }
}

impl Column {
    /// Create a leaf column with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// True when this column has no sub-columns.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pixel width used for offset accounting.
    ///
    /// Falls back from the measured width to the configured width; unset or
    /// non-finite values resolve to zero.
    #[must_use]
    pub fn resolved_width(&self) -> f64 {
        match self.real_width {
            Some(w) if w.is_finite() => w,
            _ => self.width.filter(|w| w.is_finite()).unwrap_or(0.0),
        }
    }

    /// Leaf descendants in display order (a leaf is its own sole descendant).
    #[must_use]
    pub fn leaves(&self) -> Vec<&Column> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Column>) {
        if self.children.is_empty() {
            out.push(self);
            return;
        }
        for child in &self.children {
            child.collect_leaves(out);
        }
    }
}

/// Immutable snapshot of the table's leaf columns and fixation counts.
///
/// The host builds one snapshot per column configuration; the resolver only
/// reads it and never recomputes the cached counts. `columns` holds the
/// flattened leaf columns in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnLayout {
    columns: Vec<Column>,
    fixed_leaf_count: usize,
    right_fixed_leaf_count: usize,
}

impl ColumnLayout {
    /// Build a snapshot from flattened leaf columns, deriving the fixed leaf
    /// counts from each column's `fixed` side.
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        let fixed_leaf_count = columns
            .iter()
            .filter(|c| c.fixed == Some(FixedSide::Left))
            .count();
        let right_fixed_leaf_count = columns
            .iter()
            .filter(|c| c.fixed == Some(FixedSide::Right))
            .count();
        Self {
            columns,
            fixed_leaf_count,
            right_fixed_leaf_count,
        }
    }

    /// Build a snapshot with precomputed fixed leaf counts.
    #[must_use]
    pub fn from_parts(
        columns: Vec<Column>,
        fixed_leaf_count: usize,
        right_fixed_leaf_count: usize,
    ) -> Self {
        Self {
            columns,
            fixed_leaf_count,
            right_fixed_leaf_count,
        }
    }

    /// Flattened leaf columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of leaf columns pinned to the left edge.
    #[must_use]
    pub fn fixed_leaf_count(&self) -> usize {
        self.fixed_leaf_count
    }

    /// Number of leaf columns pinned to the right edge.
    #[must_use]
    pub fn right_fixed_leaf_count(&self) -> usize {
        self.right_fixed_leaf_count
    }

    /// Total number of leaf columns.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.columns.len()
    }
}

/// Inclusive leaf-index bounds of the contiguous span a fixed column or
/// column group occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSpan {
    /// Which edge the span is pinned to.
    pub direction: FixedSide,
    /// First leaf index covered by the span.
    pub start: usize,
    /// Last leaf index covered by the span.
    pub after: usize,
}

//! Main `StickyTable` struct - the exported per-cell query surface.
//!
//! The host constructs one `StickyTable` per column configuration (columns
//! added, removed, resized, or re-pinned all mean a fresh instance) and
//! queries it per cell during render passes. The engine capability is
//! probed once at construction and treated as immutable afterwards.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { StickyTable } from 'sticktable';
//! await init();
//! const table = new StickyTable(columns, hasGutter);
//! const style = table.cell_style(0, 'left');
//! container.addEventListener('scroll', () => {
//!   table.update_scroll(tableEl, container.scrollLeft);
//! });
//!
//! // Grouped header rows resolve fixation over each group's leaf span.
//! const headerRow = table.header_row(rowColumns);
//! const groupClasses = headerRow.cell_classes(1);
//! ```

use wasm_bindgen::prelude::*;

use crate::footer::column_summaries;
use crate::layout::{fixed_column_offset, fixed_columns_class, fixed_span, sticky_cell_style};
use crate::types::{CellOffset, Column, ColumnLayout, FixedSide};

#[wasm_bindgen]
pub struct StickyTable {
    layout: ColumnLayout,
    has_gutter: bool,
    composited: bool,
}

#[wasm_bindgen]
impl StickyTable {
    /// Create a layout snapshot from a JS array of column configs.
    ///
    /// `has_gutter` reserves scrollbar-track width in right-side offsets.
    #[wasm_bindgen(constructor)]
    pub fn new(columns: JsValue, has_gutter: bool) -> Result<StickyTable, JsValue> {
        console_error_panic_hook::set_once();

        let columns: Vec<Column> = serde_wasm_bindgen::from_value(columns)
            .map_err(|e| JsValue::from_str(&format!("invalid column configuration: {e}")))?;

        #[cfg(target_arch = "wasm32")]
        let composited = crate::engine::detect_composited_sticky();
        #[cfg(not(target_arch = "wasm32"))]
        let composited = false;

        Ok(StickyTable {
            layout: ColumnLayout::new(columns),
            has_gutter,
            composited,
        })
    }

    /// Override the engine capability probe (simulated engines in tests,
    /// host-side feature gates).
    pub fn set_composited(&mut self, composited: bool) {
        self.composited = composited;
    }

    /// Whether the column at `index` is fixed in the given context
    /// (`"left"`, `"right"`, or omitted for body cells).
    #[must_use]
    pub fn is_fixed(&self, index: usize, fixed: Option<String>) -> bool {
        fixed_span(index, parse_side(fixed.as_deref()), &self.layout, None).is_some()
    }

    /// Class list for the cell at `index`.
    pub fn cell_classes(&self, index: usize, fixed: Option<String>) -> Result<JsValue, JsValue> {
        let classes =
            fixed_columns_class(index, parse_side(fixed.as_deref()), &self.layout, None, 0);
        serde_wasm_bindgen::to_value(&classes).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Engine-aware inline style object for the cell at `index`.
    pub fn cell_style(&self, index: usize, fixed: Option<String>) -> Result<JsValue, JsValue> {
        let style = sticky_cell_style(
            index,
            parse_side(fixed.as_deref()),
            &self.layout,
            None,
            self.has_gutter,
            self.composited,
        );
        serde_wasm_bindgen::to_value(&style).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Static pixel offset for the cell at `index` as `{ left }` or
    /// `{ right }`; `null` when the column is unfixed.
    pub fn cell_offset(&self, index: usize, fixed: Option<String>) -> Result<JsValue, JsValue> {
        let offset = fixed_column_offset(
            index,
            parse_side(fixed.as_deref()),
            &self.layout,
            None,
            self.has_gutter,
        );
        offset_to_js(offset)
    }

    /// Scope queries to one grouped header row.
    ///
    /// Group cells span several leaf columns, so their fixation is
    /// resolved over the row's own column configs rather than leaf
    /// positions. Pass the columns rendered in that header row.
    pub fn header_row(&self, columns: JsValue) -> Result<StickyHeaderRow, JsValue> {
        let row_columns: Vec<Column> = serde_wasm_bindgen::from_value(columns)
            .map_err(|e| JsValue::from_str(&format!("invalid header row configuration: {e}")))?;
        Ok(StickyHeaderRow {
            layout: self.layout.clone(),
            row_columns,
            has_gutter: self.has_gutter,
            composited: self.composited,
        })
    }

    /// Footer summary values for a JS array of row records.
    pub fn summaries(&self, data: JsValue, sum_text: &str) -> Result<JsValue, JsValue> {
        let data: Vec<serde_json::Value> = serde_wasm_bindgen::from_value(data)
            .map_err(|e| JsValue::from_str(&format!("invalid row data: {e}")))?;
        let sums = column_summaries(self.layout.columns(), &data, sum_text);
        serde_wasm_bindgen::to_value(&sums).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Push the current horizontal scroll offset into the CSS custom
    /// properties the composited transform path reads.
    #[cfg(target_arch = "wasm32")]
    pub fn update_scroll(
        &self,
        element: &web_sys::HtmlElement,
        scroll_left: f64,
    ) -> Result<(), JsValue> {
        crate::engine::update_scroll_vars(element, scroll_left)
    }
}

/// Per-cell queries for one grouped header row, created via
/// [`StickyTable::header_row`]. The fixation side of each cell comes
/// from its own column config.
#[wasm_bindgen]
pub struct StickyHeaderRow {
    layout: ColumnLayout,
    row_columns: Vec<Column>,
    has_gutter: bool,
    composited: bool,
}

#[wasm_bindgen]
impl StickyHeaderRow {
    /// Whether the header cell at `index` sits in a fixed region.
    #[must_use]
    pub fn is_fixed(&self, index: usize) -> bool {
        fixed_span(index, self.side(index), &self.layout, Some(&self.row_columns)).is_some()
    }

    /// Class list for the header cell at `index`.
    #[must_use]
    pub fn cell_classes(&self, index: usize) -> Vec<String> {
        fixed_columns_class(index, self.side(index), &self.layout, Some(&self.row_columns), 0)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Engine-aware inline style object for the header cell at `index`.
    pub fn cell_style(&self, index: usize) -> Result<JsValue, JsValue> {
        let style = sticky_cell_style(
            index,
            self.side(index),
            &self.layout,
            Some(&self.row_columns),
            self.has_gutter,
            self.composited,
        );
        serde_wasm_bindgen::to_value(&style).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Static pixel offset for the header cell at `index`; `null` when
    /// the cell is unfixed.
    pub fn cell_offset(&self, index: usize) -> Result<JsValue, JsValue> {
        let offset = fixed_column_offset(
            index,
            self.side(index),
            &self.layout,
            Some(&self.row_columns),
            self.has_gutter,
        );
        offset_to_js(offset)
    }

    fn side(&self, index: usize) -> Option<FixedSide> {
        self.row_columns.get(index).and_then(|column| column.fixed)
    }
}

fn offset_to_js(offset: Option<CellOffset>) -> Result<JsValue, JsValue> {
    let value = match offset {
        Some(CellOffset::Left(v)) => serde_json::json!({ "left": v }),
        Some(CellOffset::Right(v)) => serde_json::json!({ "right": v }),
        None => serde_json::Value::Null,
    };
    serde_wasm_bindgen::to_value(&value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_side(fixed: Option<&str>) -> Option<FixedSide> {
    fixed.and_then(FixedSide::parse)
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
    use crate::types::{FIXED_LEFT_CLASS, LAST_FIXED_CLASS};

    fn leaf(id: &str, fixed: Option<FixedSide>) -> Column {
        Column {
            id: id.to_string(),
            width: Some(80.0),
            fixed,
            ..Column::default()
        }
    }

    fn grouped_header_row() -> StickyHeaderRow {
        // Leaves: a, b1, b2, c — three left-fixed; the header row groups
        // b1 and b2 under `b`.
        let layout = ColumnLayout::new(vec![
            leaf("a", Some(FixedSide::Left)),
            leaf("b1", Some(FixedSide::Left)),
            leaf("b2", Some(FixedSide::Left)),
            leaf("c", None),
        ]);
        let row_columns = vec![
            leaf("a", Some(FixedSide::Left)),
            Column {
                id: "b".to_string(),
                fixed: Some(FixedSide::Left),
                children: vec![
                    leaf("b1", Some(FixedSide::Left)),
                    leaf("b2", Some(FixedSide::Left)),
                ],
                ..Column::default()
            },
            leaf("c", None),
        ];
        StickyHeaderRow {
            layout,
            row_columns,
            has_gutter: false,
            composited: false,
        }
    }

    #[test]
    fn test_grouped_cells_resolve_over_leaf_spans() {
        let row = grouped_header_row();
        assert!(row.is_fixed(0));
        assert!(row.is_fixed(1));
        assert!(!row.is_fixed(2));
        assert!(!row.is_fixed(7));
    }

    #[test]
    fn test_grouped_cell_classes_mark_the_boundary_group() {
        let row = grouped_header_row();
        assert_eq!(row.cell_classes(0), vec![FIXED_LEFT_CLASS]);
        // Group `b` covers the last two fixed leaves.
        assert_eq!(
            row.cell_classes(1),
            vec![FIXED_LEFT_CLASS, LAST_FIXED_CLASS]
        );
        assert!(row.cell_classes(2).is_empty());
    }

    #[test]
    fn test_fixation_side_comes_from_the_row_config() {
        let mut row = grouped_header_row();
        // Re-pinning the group to the wrong edge drops it out of the
        // fixed region instead of silently reusing the leaf side.
        row.row_columns[1].fixed = Some(FixedSide::Right);
        assert!(!row.is_fixed(1));
    }
}

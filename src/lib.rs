//! sticktable - sticky fixed-column layout for HTML tables
//!
//! Computes, for every column and scroll state of a host table, which cells
//! are fixed, the pixel offset they render at, and the CSS class/style
//! combination that achieves the sticky effect across rendering engines:
//! - Column fixation resolution, including grouped headers
//! - Engine-aware sticky styles (composited transform vs. native sticky)
//! - Row identity, stable multi-key sort, nested-row traversal
//! - Footer summary aggregation
//!
//! The core is pure and fully testable natively; the browser boundary
//! (engine probe, scroll variables, the exported `StickyTable`) is behind
//! `wasm32`.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { StickyTable } from 'sticktable';
//! await init();
//! const table = new StickyTable(columns, hasGutter);
//! const classes = table.cell_classes(0, 'left');
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod footer;
pub mod layout;
pub mod rows;
pub mod sort;
pub mod table;
pub mod tree;
pub mod types;

use wasm_bindgen::prelude::*;

// Re-export the main viewer-facing struct
pub use table::{StickyHeaderRow, StickyTable};

pub use types::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

//! Fixed-column layout core.
//!
//! This module decides, for every column and fixation context:
//! - whether the column (or column group) belongs to the left-fixed,
//!   right-fixed, or unfixed partition, and its contiguous leaf span
//! - the pixel offset a fixed cell renders at
//! - the CSS class/style combination that achieves the sticky effect
//!   across rendering engines

mod fixation;
mod sticky;

pub use fixation::fixed_span;
pub use sticky::{
    ensure_position, fixed_column_offset, fixed_columns_class, sticky_cell_style, GUTTER_WIDTH,
};

//! Data types for the sticky-column layout engine.

mod column;
mod style;

pub use column::*;
pub use style::*;

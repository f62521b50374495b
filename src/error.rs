//! Structured error types for sticktable.
//!
//! All fallible operations in the crate return [`Result`] with these types
//! instead of bare strings.

/// All errors that can occur while resolving rows and layout.
#[derive(Debug, thiserror::Error)]
pub enum SticktableError {
    /// A row was required but absent (JSON `null`).
    #[error("row is required when getting row identity")]
    MissingRow,

    /// A dotted row-key path hit a missing intermediate segment.
    #[error("row key path '{path}' has no segment '{segment}'")]
    RowKeyPath {
        /// The full dotted path that was being resolved.
        path: String,
        /// The segment that could not be read.
        segment: String,
    },

    /// Invalid column configuration handed over the JS boundary.
    #[error("invalid column configuration: {0}")]
    ColumnConfig(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SticktableError>;

impl From<String> for SticktableError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for SticktableError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SticktableError> for wasm_bindgen::JsValue {
    fn from(e: SticktableError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

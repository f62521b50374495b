//! Built-in column kind defaults and width parsing.

use serde::{Deserialize, Serialize};

/// Built-in column kinds. The special kinds render host-provided widgets
/// (checkbox, expand toggle, row number) and start from a fixed 48px width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Plain data column.
    #[default]
    Default,
    /// Row selection checkbox column.
    Selection,
    /// Row number column.
    Index,
    /// Expand toggle column.
    Expand,
}

/// Starting configuration of a column kind, applied before user options.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnStarts {
    pub width: Option<f64>,
    pub min_width: Option<f64>,
    pub real_width: Option<f64>,
    pub class_name: Option<&'static str>,
}

impl ColumnKind {
    /// Per-kind starting configuration.
    #[must_use]
    pub fn starts(self) -> ColumnStarts {
        match self {
            Self::Default => ColumnStarts::default(),
            Self::Selection => ColumnStarts {
                width: Some(48.0),
                min_width: Some(48.0),
                real_width: Some(48.0),
                class_name: Some("table-column--selection"),
            },
            Self::Index | Self::Expand => ColumnStarts {
                width: Some(48.0),
                min_width: Some(48.0),
                real_width: Some(48.0),
                class_name: None,
            },
        }
    }
}

/// How an index column numbers its rows.
pub enum IndexMethod {
    /// Add a fixed offset to the zero-based row index.
    Offset(usize),
    /// Compute the shown number from the zero-based row index.
    Compute(Box<dyn Fn(usize) -> usize>),
}

/// Number shown in an index column cell. Defaults to one-based numbering.
#[must_use]
pub fn display_index(row_index: usize, method: Option<&IndexMethod>) -> usize {
    match method {
        None => row_index + 1,
        Some(IndexMethod::Offset(offset)) => row_index + offset,
        Some(IndexMethod::Compute(f)) => f(row_index),
    }
}

/// Parse a configured width like `"50"` or `"50px"` to pixels: the leading
/// integer is taken, anything unparseable is unset.
#[must_use]
pub fn parse_width(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let mut digits = String::new();
    for (i, c) in trimmed.chars().enumerate() {
        if c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+')) {
            digits.push(c);
        } else {
            break;
        }
    }
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Like [`parse_width`] but with the host's 80px minimum-width default.
#[must_use]
pub fn parse_min_width(raw: &str) -> f64 {
    parse_width(raw).unwrap_or(80.0)
}

//! Row identity and membership utilities.
//!
//! Rows are opaque JSON records; identity is derived from a [`RowKey`] so
//! the host can track rows across re-renders independent of positional
//! index.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::error::{Result, SticktableError};

/// How a row's identity is derived.
///
/// A closed set of strategies selected by the caller: a dot-separated
/// property path, or an extractor function invoked with the row.
pub enum RowKey {
    /// Dot-separated property path resolved left-to-right.
    Path(String),
    /// Extractor invoked with the row.
    Extract(Box<dyn Fn(&Value) -> Value>),
}

impl RowKey {
    /// Identity by property path.
    #[must_use]
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    /// Identity by extractor function.
    #[must_use]
    pub fn extract(f: impl Fn(&Value) -> Value + 'static) -> Self {
        Self::Extract(Box::new(f))
    }
}

impl fmt::Debug for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Extract(_) => f.write_str("Extract(..)"),
        }
    }
}

/// A row found by identity, with its position in the source slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyedRow<'a> {
    /// The matched row.
    pub row: &'a Value,
    /// Index of the row in the source slice.
    pub index: usize,
}

/// Derive a row's identity.
///
/// Errors on a `null` row (required-argument contract) and on a dotted path
/// whose *intermediate* segment is missing — both caller configuration
/// errors surfaced rather than silently defaulted. A missing final segment
/// resolves to `Null`. Paths are re-resolved on every call; there is no
/// caching.
pub fn get_row_identity(row: &Value, row_key: &RowKey) -> Result<Value> {
    if row.is_null() {
        return Err(SticktableError::MissingRow);
    }
    match row_key {
        RowKey::Path(path) => {
            if !path.contains('.') {
                return Ok(row.get(path).cloned().unwrap_or(Value::Null));
            }
            let mut current = row;
            let mut segments = path.split('.').peekable();
            while let Some(segment) = segments.next() {
                match current.get(segment) {
                    Some(next) => current = next,
                    None if segments.peek().is_some() => {
                        return Err(SticktableError::RowKeyPath {
                            path: path.clone(),
                            segment: segment.to_string(),
                        });
                    }
                    None => return Ok(Value::Null),
                }
            }
            Ok(current.clone())
        }
        RowKey::Extract(f) => Ok(f(row)),
    }
}

/// Canonical map key for an identity value (strings unquoted, everything
/// else in JSON rendering).
#[must_use]
pub fn identity_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Map each row's identity to the row and its index.
///
/// Duplicate identities keep the last row seen ("last wins"). Duplicate keys
/// are an upstream data-quality issue; this function does not flag them.
pub fn get_keys_map<'a>(
    rows: &'a [Value],
    row_key: &RowKey,
) -> Result<HashMap<String, KeyedRow<'a>>> {
    let mut map = HashMap::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let identity = get_row_identity(row, row_key)?;
        map.insert(identity_key(&identity), KeyedRow { row, index });
    }
    Ok(map)
}

/// First row whose identity matches `key`, if any. Rows whose identity
/// cannot be derived are skipped.
#[must_use]
pub fn find_row_by_key<'a>(rows: &'a [Value], row_key: &RowKey, key: &str) -> Option<&'a Value> {
    rows.iter().find(|row| {
        get_row_identity(row, row_key)
            .map(|id| identity_key(&id) == key)
            .unwrap_or(false)
    })
}

/// Toggle a row's membership in a working collection.
///
/// With `forced` the membership is made to match the flag (a no-op returns
/// `false`); without it the membership flips. Returns whether membership
/// changed.
pub fn toggle_row_status<T: PartialEq + Clone>(
    rows: &mut Vec<T>,
    row: &T,
    forced: Option<bool>,
) -> bool {
    let position = rows.iter().position(|r| r == row);
    match (forced, position) {
        (Some(true), None) | (None, None) => {
            rows.push(row.clone());
            true
        }
        (Some(false), Some(i)) | (None, Some(i)) => {
            rows.remove(i);
            true
        }
        (Some(true), Some(_)) | (Some(false), None) => false,
    }
}

/// Resolve a dot path leniently, yielding `Null` for anything missing.
/// Sort keys and footer aggregation use this; identity resolution does not.
pub(crate) fn lenient_path(row: &Value, path: &str) -> Value {
    let mut current = row;
    for segment in path.split('.') {
        match current.get(segment) {
            Some(next) => current = next,
            None => return Value::Null,
        }
    }
    current.clone()
}

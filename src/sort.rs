//! Stable multi-key row sorting.
//!
//! Key extraction is a closed set of strategies picked by the caller
//! ([`SortBy`]) rather than inferred from runtime value shapes. Sorting is
//! stable in both directions: equal keys keep their input order.

use std::cmp::Ordering;

use serde_json::Value;

use crate::rows::lenient_path;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortOrder {
    /// Host convention: negative numbers mean descending.
    #[must_use]
    pub fn from_signum(value: i32) -> Self {
        if value < 0 {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    /// Host convention: the literal `"descending"` reverses, anything else
    /// is ascending.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "descending" {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Ascending => ord,
            Self::Descending => ord.reverse(),
        }
    }
}

/// One component of a composite sort key.
pub enum SortField {
    /// Extract by dot path; missing values resolve to `Null`.
    Path(String),
    /// Extract with a function receiving the row and its original index.
    Extract(Box<dyn Fn(&Value, usize) -> Value>),
}

impl SortField {
    /// Field by property path.
    #[must_use]
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    /// Field by extractor function.
    #[must_use]
    pub fn extract(f: impl Fn(&Value, usize) -> Value + 'static) -> Self {
        Self::Extract(Box::new(f))
    }

    fn value(&self, row: &Value, index: usize) -> Value {
        match self {
            Self::Path(path) => lenient_path(row, path),
            Self::Extract(f) => f(row, index),
        }
    }
}

/// Sort criteria.
pub enum SortBy {
    /// Single-key extraction by path. Rows wrapped as `{ "$value": .. }`
    /// are unwrapped first unless the key is the literal `"$key"`;
    /// non-object rows compare by the row value itself.
    Key(String),
    /// Composite key compared element by element, first mismatch decides.
    /// An empty field list means no criteria.
    Fields(Vec<SortField>),
    /// Comparator receiving raw row values; fully determines the order.
    Comparator(Box<dyn Fn(&Value, &Value) -> Ordering>),
}

/// Stable sort of `rows` by the given criteria.
///
/// With no criteria (`None`, or an empty `Fields` list) the input comes
/// back unchanged. Descending reverses the key comparison only, so ties
/// keep their input order either way.
#[must_use]
pub fn order_by(rows: Vec<Value>, by: Option<&SortBy>, order: SortOrder) -> Vec<Value> {
    let Some(by) = by else {
        return rows;
    };
    match by {
        SortBy::Comparator(cmp) => {
            let mut rows = rows;
            rows.sort_by(|a, b| order.apply(cmp(a, b)));
            rows
        }
        SortBy::Key(key) => sort_with_keys(rows, order, |row, _| vec![key_value(row, key)]),
        SortBy::Fields(fields) if fields.is_empty() => rows,
        SortBy::Fields(fields) => sort_with_keys(rows, order, |row, index| {
            fields.iter().map(|f| f.value(row, index)).collect()
        }),
    }
}

fn sort_with_keys(
    rows: Vec<Value>,
    order: SortOrder,
    extract: impl Fn(&Value, usize) -> Vec<Value>,
) -> Vec<Value> {
    let mut tagged: Vec<(Vec<Value>, Value)> = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| (extract(&row, index), row))
        .collect();
    tagged.sort_by(|(a, _), (b, _)| order.apply(compare_keys(a, b)));
    tagged.into_iter().map(|(_, row)| row).collect()
}

fn key_value(row: &Value, key: &str) -> Value {
    // Legacy wrapped rows carry the payload under "$value".
    let target = match row {
        Value::Object(map) if key != "$key" && map.contains_key("$value") => {
            map.get("$value").cloned().unwrap_or(Value::Null)
        }
        other => other.clone(),
    };
    if target.is_object() {
        lenient_path(&target, key)
    } else {
        target
    }
}

fn compare_keys(a: &[Value], b: &[Value]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        let ord = compare_values(x, y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Value ordering: numbers numerically, strings lexicographically, booleans
/// false-before-true. Cross-type and non-ordered pairs compare equal, the
/// same way the host's relational operators treat them.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
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
    use serde_json::json;

    fn rows() -> Vec<Value> {
        vec![
            json!({"name": "carol", "age": 30, "tag": 0}),
            json!({"name": "alice", "age": 25, "tag": 1}),
            json!({"name": "bob", "age": 30, "tag": 2}),
        ]
    }

    #[test]
    fn test_no_criteria_returns_input_unchanged() {
        let input = rows();
        assert_eq!(order_by(input.clone(), None, SortOrder::Ascending), input);
        assert_eq!(
            order_by(
                input.clone(),
                Some(&SortBy::Fields(Vec::new())),
                SortOrder::Descending
            ),
            input
        );
        assert!(order_by(Vec::new(), None, SortOrder::Ascending).is_empty());
    }

    #[test]
    fn test_single_key_ascending_and_descending() {
        let by = SortBy::Key("name".to_string());
        let sorted = order_by(rows(), Some(&by), SortOrder::Ascending);
        let names: Vec<&str> = sorted.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["alice", "bob", "carol"]);

        let sorted = order_by(rows(), Some(&by), SortOrder::Descending);
        let names: Vec<&str> = sorted.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["carol", "bob", "alice"]);
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let by = SortBy::Key("age".to_string());
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let sorted = order_by(rows(), Some(&by), order);
            let tied: Vec<i64> = sorted
                .iter()
                .filter(|r| r["age"] == json!(30))
                .map(|r| r["tag"].as_i64().unwrap())
                .collect();
            assert_eq!(tied, [0, 2], "ties must be stable for {order:?}");
        }
    }

    #[test]
    fn test_composite_fields_first_mismatch_decides() {
        let by = SortBy::Fields(vec![
            SortField::path("age"),
            SortField::path("name"),
        ]);
        let sorted = order_by(rows(), Some(&by), SortOrder::Ascending);
        let names: Vec<&str> = sorted.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["alice", "bob", "carol"]);
    }

    #[test]
    fn test_comparator_fully_determines_order() {
        let by = SortBy::Comparator(Box::new(|a, b| {
            let a = a["name"].as_str().map(str::len).unwrap_or(0);
            let b = b["name"].as_str().map(str::len).unwrap_or(0);
            a.cmp(&b)
        }));
        let sorted = order_by(rows(), Some(&by), SortOrder::Ascending);
        assert_eq!(sorted[0]["name"], json!("bob"));
    }

    #[test]
    fn test_wrapped_value_unwraps_before_extraction() {
        let rows = vec![
            json!({"$value": {"name": "zed"}}),
            json!({"$value": {"name": "amy"}}),
        ];
        let by = SortBy::Key("name".to_string());
        let sorted = order_by(rows, Some(&by), SortOrder::Ascending);
        assert_eq!(sorted[0]["$value"]["name"], json!("amy"));
    }

    #[test]
    fn test_plain_values_sort_by_themselves() {
        let rows = vec![json!(3), json!(1), json!(2)];
        let by = SortBy::Key("anything".to_string());
        let sorted = order_by(rows, Some(&by), SortOrder::Ascending);
        assert_eq!(sorted, vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn test_sort_order_conventions() {
        assert_eq!(SortOrder::from_signum(-1), SortOrder::Descending);
        assert_eq!(SortOrder::from_signum(1), SortOrder::Ascending);
        assert_eq!(SortOrder::from_signum(0), SortOrder::Ascending);
        assert_eq!(SortOrder::parse("descending"), SortOrder::Descending);
        assert_eq!(SortOrder::parse("ascending"), SortOrder::Ascending);
        assert_eq!(SortOrder::parse("anything"), SortOrder::Ascending);
    }
}

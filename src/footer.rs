//! Summary-row aggregation and footer cell glue.
//!
//! The footer shows one summary cell per leaf column: the first column
//! carries the caption, numeric columns carry a precision-aware sum, and
//! non-numeric columns stay empty. Class/style assembly reuses the fixed
//! column core so footer cells stick together with their body cells.

use serde_json::Value;

use crate::layout::{fixed_columns_class, sticky_cell_style};
use crate::rows::lenient_path;
use crate::types::{Column, ColumnLayout, FixedSide};

/// Decimal places beyond this are not representable reliably.
const MAX_PRECISION: usize = 20;

/// Per-column summary values.
///
/// The first column shows `sum_text`. Every other column with a `property`
/// sums the parseable numeric values of that field: the sum is rounded at
/// each step to the maximum decimal precision seen in the inputs, matching
/// how the host renders accumulated floats. Columns with no parseable value
/// yield an empty string.
#[must_use]
pub fn column_summaries(columns: &[Column], data: &[Value], sum_text: &str) -> Vec<String> {
    columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            if index == 0 {
                return sum_text.to_string();
            }
            let Some(property) = column.property.as_deref() else {
                return String::new();
            };
            summarize_property(property, data)
        })
        .collect()
}

fn summarize_property(property: &str, data: &[Value]) -> String {
    let values: Vec<f64> = data
        .iter()
        .map(|row| numeric(&lenient_path(row, property)))
        .collect();

    let precision = values
        .iter()
        .filter(|v| !v.is_nan())
        .map(|v| decimals(*v))
        .max()
        .map(|p| p.min(MAX_PRECISION));
    let Some(precision) = precision else {
        // No parseable value in the whole column.
        return String::new();
    };

    let sum = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold(0.0, |prev, v| round_to(prev + v, precision));
    format_number(sum, precision)
}

/// Classes for one footer cell: column id, presentation classes, the fixed
/// marker classes, and `is-leaf` for leaf columns.
#[must_use]
pub fn footer_cell_classes(index: usize, column: &Column, layout: &ColumnLayout) -> Vec<String> {
    let mut classes = vec![column.id.clone()];
    for extra in [&column.align, &column.label_class_name, &column.class_name] {
        if let Some(extra) = extra {
            classes.push(extra.clone());
        }
    }
    classes.extend(
        fixed_columns_class(index, column.fixed, layout, None, 0)
            .iter()
            .map(|c| (*c).to_string()),
    );
    if column.is_leaf() {
        classes.push("is-leaf".to_string());
    }
    classes
}

/// Inline style entries for one footer cell: the caller's base entries with
/// the sticky style merged on top (sticky wins on conflicts).
#[must_use]
pub fn footer_cell_style(
    index: usize,
    fixed_side: Option<FixedSide>,
    layout: &ColumnLayout,
    has_gutter: bool,
    composited: bool,
    base: &[(String, String)],
) -> Vec<(String, String)> {
    let sticky = sticky_cell_style(index, fixed_side, layout, None, has_gutter, composited);
    let overlay = sticky.css_entries();
    let mut merged: Vec<(String, String)> = base
        .iter()
        .filter(|(name, _)| !overlay.iter().any(|(o, _)| o == name))
        .cloned()
        .collect();
    merged.extend(
        overlay
            .into_iter()
            .map(|(name, value)| (name.to_string(), value)),
    );
    merged
}

/// Parse a JSON value the way the host coerces cell values to numbers.
/// Unparseable values come back as NaN and are skipped by the fold.
fn numeric(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Bool(true) => 1.0,
        Value::Bool(false) => 0.0,
        _ => f64::NAN,
    }
}

fn decimals(value: f64) -> usize {
    let rendered = format!("{value}");
    rendered
        .split_once('.')
        .map(|(_, fraction)| fraction.len())
        .unwrap_or(0)
}

fn round_to(value: f64, precision: usize) -> f64 {
    let digits = i32::try_from(precision).unwrap_or(20);
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

fn format_number(value: f64, precision: usize) -> String {
    let rendered = format!("{value:.precision$}");
    if !rendered.contains('.') {
        return rendered;
    }
    rendered.trim_end_matches('0').trim_end_matches('.').to_string()
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

    fn amount_column() -> Column {
        Column {
            id: "col-amount".to_string(),
            property: Some("amount".to_string()),
            ..Column::default()
        }
    }

    #[test]
    fn test_first_column_carries_caption() {
        let columns = vec![Column::new("col-name"), amount_column()];
        let sums = column_summaries(&columns, &[], "Total");
        assert_eq!(sums[0], "Total");
    }

    #[test]
    fn test_sum_respects_input_precision() {
        let columns = vec![Column::new("col-name"), amount_column()];
        let data = vec![
            json!({"amount": 0.1}),
            json!({"amount": 0.2}),
            json!({"amount": 0.3}),
        ];
        let sums = column_summaries(&columns, &data, "Total");
        assert_eq!(sums[1], "0.6");
    }

    #[test]
    fn test_numeric_strings_are_summed() {
        let columns = vec![Column::new("col-name"), amount_column()];
        let data = vec![json!({"amount": "10"}), json!({"amount": "15.5"})];
        let sums = column_summaries(&columns, &data, "Total");
        assert_eq!(sums[1], "25.5");
    }

    #[test]
    fn test_non_numeric_column_is_empty() {
        let mut column = amount_column();
        column.property = Some("label".to_string());
        let columns = vec![Column::new("col-name"), column];
        let data = vec![json!({"label": "x"}), json!({"label": "y"})];
        let sums = column_summaries(&columns, &data, "Total");
        assert_eq!(sums[1], "");
    }

    #[test]
    fn test_unparseable_values_are_skipped() {
        let columns = vec![Column::new("col-name"), amount_column()];
        let data = vec![
            json!({"amount": 5}),
            json!({"amount": "n/a"}),
            json!({"amount": 7}),
        ];
        let sums = column_summaries(&columns, &data, "Total");
        assert_eq!(sums[1], "12");
    }
}

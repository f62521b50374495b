//! Benchmarks for fixation resolution and row sorting.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_possible_truncation)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use sticktable::layout::{fixed_span, sticky_cell_style};
use sticktable::sort::{order_by, SortBy, SortOrder};
use sticktable::{Column, ColumnLayout, FixedSide};

fn wide_layout(columns: usize) -> ColumnLayout {
    let columns = (0..columns)
        .map(|i| Column {
            id: format!("col-{i}"),
            width: Some(80.0),
            fixed: match i {
                0..=2 => Some(FixedSide::Left),
                i if i >= 97 => Some(FixedSide::Right),
                _ => None,
            },
            ..Column::default()
        })
        .collect();
    ColumnLayout::new(columns)
}

/// Resolve fixation for every cell of one render pass over 100 columns.
fn bench_fixed_span(c: &mut Criterion) {
    let layout = wide_layout(100);

    c.bench_function("fixed_span_full_row", |b| {
        b.iter(|| {
            for index in 0..layout.leaf_count() {
                black_box(fixed_span(black_box(index), None, &layout, None));
            }
        })
    });
}

/// Derive sticky styles for every cell on both engine paths.
fn bench_sticky_styles(c: &mut Criterion) {
    let layout = wide_layout(100);

    c.bench_function("sticky_cell_style_full_row", |b| {
        b.iter(|| {
            for index in 0..layout.leaf_count() {
                black_box(sticky_cell_style(index, None, &layout, None, true, true));
                black_box(sticky_cell_style(index, None, &layout, None, true, false));
            }
        })
    });
}

/// Stable single-key sort over 10k rows.
fn bench_order_by(c: &mut Criterion) {
    let rows: Vec<_> = (0..10_000)
        .map(|i| json!({"id": i, "name": format!("row-{}", (i * 7919) % 10_000)}))
        .collect();
    let by = SortBy::Key("name".to_string());

    c.bench_function("order_by_10k", |b| {
        b.iter(|| {
            black_box(order_by(
                black_box(rows.clone()),
                Some(&by),
                SortOrder::Ascending,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_fixed_span,
    bench_sticky_styles,
    bench_order_by
);
criterion_main!(benches);

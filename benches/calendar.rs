//! Benchmarks for the month-grid builder.

use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vulcan_tui::calendar::{DisabledRule, GridOptions, MonthView, Selection, month_grid};

fn bench_month_grid(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 2, 14).expect("valid date");

    c.bench_function("month_grid/default", |b| {
        let view = MonthView::new(2024, 1);
        let opts = GridOptions::default();
        b.iter(|| month_grid(black_box(view), black_box(&opts), black_box(today)));
    });

    c.bench_function("month_grid/loaded_options", |b| {
        let view = MonthView::new(2024, 1);
        let selection: Selection = (1..=10)
            .filter_map(|d| NaiveDate::from_ymd_opt(2024, 2, d))
            .collect();
        let opts = GridOptions::default()
            .with_week_start(1)
            .with_selection(selection)
            .with_disabled(DisabledRule::predicate(|d| {
                use chrono::Datelike;
                d.day() % 2 == 0
            }))
            .with_bounds(
                NaiveDate::from_ymd_opt(2024, 1, 15),
                NaiveDate::from_ymd_opt(2024, 3, 15),
            );
        b.iter(|| month_grid(black_box(view), black_box(&opts), black_box(today)));
    });

    c.bench_function("month_grid/year_sweep", |b| {
        let opts = GridOptions::default();
        b.iter(|| {
            for month0 in 0..12 {
                let view = MonthView::new(black_box(2024), month0);
                black_box(month_grid(view, &opts, today));
            }
        });
    });
}

criterion_group!(benches, bench_month_grid);
criterion_main!(benches);

//! Integration tests for the calendar month grid.
//!
//! Pins the concrete behavior of the grid builder: the 42-cell window,
//! week-start alignment, flag derivation, and the bounds/predicate
//! union for disabled dates.

use chrono::NaiveDate;
use vulcan_tui::calendar::{
    Clock, DisabledRule, FixedClock, GRID_CELLS, GridOptions, MonthView, Selection, month_grid,
    weekday_labels,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

#[test]
fn february_2024_sunday_start_window() {
    // Leap-year February viewed with the default Sunday week start:
    // the grid runs 2024-01-28 .. 2024-03-09.
    let view = MonthView::new(2024, 1);
    let grid = month_grid(view, &GridOptions::default(), date(2024, 2, 14));

    assert_eq!(grid.days.len(), GRID_CELLS);
    assert_eq!(grid.days[0].date, date(2024, 1, 28));
    assert_eq!(grid.days[GRID_CELLS - 1].date, date(2024, 3, 9));
    assert_eq!(
        grid.days.iter().filter(|d| d.is_current_month()).count(),
        29
    );
    assert_eq!(grid.weekdays, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
}

#[test]
fn february_2024_monday_start_shifts_offset_by_one() {
    let view = MonthView::new(2024, 1);
    let sunday = month_grid(view, &GridOptions::default(), date(2024, 2, 14));
    let monday = month_grid(
        view,
        &GridOptions::default().with_week_start(1),
        date(2024, 2, 14),
    );

    let offset = |g: &vulcan_tui::MonthGrid| {
        g.days.iter().take_while(|d| !d.is_current_month()).count()
    };
    assert_eq!(offset(&sunday), 4);
    assert_eq!(offset(&monday), 3);
    assert_eq!(monday.weekdays[0], "Mon");
    assert_eq!(monday.weekdays[6], "Sun");
}

#[test]
fn overflow_prefix_and_suffix_are_contiguous() {
    for month0 in 0..12 {
        let view = MonthView::new(2023, month0);
        let grid = month_grid(view, &GridOptions::default(), date(2023, 6, 15));
        let flags: Vec<bool> = grid.days.iter().map(|d| d.is_current_month()).collect();

        let prefix = flags.iter().take_while(|&&c| !c).count();
        let run = flags.iter().skip(prefix).take_while(|&&c| c).count();
        let suffix = flags.iter().skip(prefix + run).take_while(|&&c| !c).count();
        assert_eq!(prefix + run + suffix, GRID_CELLS, "month {month0}");
        assert_eq!(run as u32, view.days_in_month(), "month {month0}");
    }
}

#[test]
fn dates_ascend_by_exactly_one_day() {
    let grid = month_grid(
        MonthView::new(1999, 11),
        &GridOptions::default(),
        date(2000, 1, 1),
    );
    for pair in grid.days.windows(2) {
        assert_eq!(pair[1].date.signed_duration_since(pair[0].date).num_days(), 1);
    }
}

#[test]
fn min_max_bounds_override_permissive_predicate() {
    // Bounds 2024-03-10 ..= 2024-03-20: everything outside is disabled
    // even though the predicate disables nothing.
    let opts = GridOptions::default()
        .with_disabled(DisabledRule::predicate(|_| false))
        .with_bounds(Some(date(2024, 3, 10)), Some(date(2024, 3, 20)));
    let grid = month_grid(MonthView::new(2024, 2), &opts, date(2024, 3, 15));

    for day in &grid.days {
        let inside = (date(2024, 3, 10)..=date(2024, 3, 20)).contains(&day.date);
        assert_eq!(day.is_disabled(), !inside, "{}", day.date);
    }
}

#[test]
fn predicate_unions_with_bounds() {
    let weekend = DisabledRule::predicate(|d| {
        use chrono::Datelike;
        matches!(d.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun)
    });
    let opts = GridOptions::default()
        .with_disabled(weekend)
        .with_bounds(Some(date(2024, 3, 1)), None);
    let grid = month_grid(MonthView::new(2024, 2), &opts, date(2024, 3, 15));

    // 2024-02-29 is out of bounds; 2024-03-02 is a Saturday.
    let get = |d: NaiveDate| {
        grid.days
            .iter()
            .find(|c| c.date == d)
            .expect("in window")
    };
    assert!(get(date(2024, 2, 29)).is_disabled());
    assert!(get(date(2024, 3, 2)).is_disabled());
    assert!(!get(date(2024, 3, 4)).is_disabled());
}

#[test]
fn selection_set_matches_by_date_equality() {
    let selection: Selection = [date(2024, 2, 5), date(2024, 2, 6), date(2024, 5, 1)]
        .into_iter()
        .collect();
    let opts = GridOptions::default().with_selection(selection);
    let grid = month_grid(MonthView::new(2024, 1), &opts, date(2024, 2, 14));

    // The May date is outside the 42-cell window and cannot match.
    let selected: Vec<NaiveDate> = grid
        .days
        .iter()
        .filter(|d| d.is_selected())
        .map(|d| d.date)
        .collect();
    assert_eq!(selected, vec![date(2024, 2, 5), date(2024, 2, 6)]);
}

#[test]
fn today_flag_tracks_injected_clock_only() {
    let clock = FixedClock(date(2024, 2, 29));
    let grid = month_grid(
        MonthView::new(2024, 1),
        &GridOptions::default(),
        clock.today(),
    );
    let todays: Vec<NaiveDate> = grid
        .days
        .iter()
        .filter(|d| d.is_today())
        .map(|d| d.date)
        .collect();
    assert_eq!(todays, vec![date(2024, 2, 29)]);
}

#[test]
fn month_12_rolls_into_next_year() {
    let grid = month_grid(
        MonthView::new(2024, 12),
        &GridOptions::default(),
        date(2025, 1, 15),
    );
    assert_eq!(grid.view.year(), 2025);
    assert_eq!(grid.view.month0(), 0);
    assert!(grid.days.iter().any(|d| d.date == date(2025, 1, 31)));
}

#[test]
fn week_start_beyond_range_reduces_mod_7() {
    assert_eq!(weekday_labels(8), weekday_labels(1));
    let a = month_grid(
        MonthView::new(2024, 1),
        &GridOptions::default().with_week_start(8),
        date(2024, 2, 1),
    );
    let b = month_grid(
        MonthView::new(2024, 1),
        &GridOptions::default().with_week_start(1),
        date(2024, 2, 1),
    );
    assert_eq!(a.days[0].date, b.days[0].date);
}

//! Month-grid computation.
//!
//! [`month_grid`] is a pure function from a month view, grid options, and
//! a reference date to a fixed 42-cell grid (6 weeks × 7 days): the
//! trailing days of the previous month, every day of the target month,
//! and enough leading days of the next month to fill the grid. Each cell
//! carries [`DayFlags`] for current-month membership, today, selection,
//! and disabled state.
//!
//! The grid holds no resources and is recomputed from scratch whenever
//! the viewed month or options change. The reference date is an explicit
//! argument; callers obtain it from a [`Clock`] so tests can pin it.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use vulcan_tui::calendar::{GridOptions, MonthView, month_grid};
//!
//! let view = MonthView::new(2024, 1); // February 2024
//! let today = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
//! let grid = month_grid(view, &GridOptions::default(), today);
//!
//! assert_eq!(grid.days.len(), 42);
//! assert_eq!(grid.days.iter().filter(|d| d.is_current_month()).count(), 29);
//! assert_eq!(grid.weekdays[0], "Sun");
//! ```

use bitflags::bitflags;
use chrono::{Datelike, Days, NaiveDate};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Number of cells in a month grid: 6 full weeks.
pub const GRID_CELLS: usize = 42;

/// Canonical weekday labels, Sunday first.
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Full month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Keeps the ±6-week window of any view inside chrono's representable range.
const YEAR_CLAMP: i32 = 200_000;

bitflags! {
    /// Per-cell derived flags.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct DayFlags: u8 {
        /// The date belongs to the viewed month.
        const CURRENT_MONTH = 0x01;
        /// The date equals the reference date.
        const TODAY         = 0x02;
        /// The date matches the caller's selection.
        const SELECTED      = 0x04;
        /// The date is disabled by bounds or the disabled rule.
        const DISABLED      = 0x08;
    }
}

/// One cell of the month grid.
///
/// A value type recreated on every build; cells have no persistent
/// identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDay {
    /// The cell's calendar date.
    pub date: NaiveDate,
    /// Derived cell flags.
    pub flags: DayFlags,
}

impl CalendarDay {
    /// True only for days of the viewed month.
    #[must_use]
    pub const fn is_current_month(&self) -> bool {
        self.flags.contains(DayFlags::CURRENT_MONTH)
    }

    /// True iff the date equals the reference date.
    #[must_use]
    pub const fn is_today(&self) -> bool {
        self.flags.contains(DayFlags::TODAY)
    }

    /// True iff the date matches the selection.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.flags.contains(DayFlags::SELECTED)
    }

    /// True iff the date is disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.flags.contains(DayFlags::DISABLED)
    }
}

/// A viewed month: year plus 0-based month index.
///
/// Out-of-range month indices roll into adjacent years (month 12 is
/// January of the following year, month -1 is December of the previous
/// one), matching the arithmetic of the host environment the behavior was
/// lifted from. Years are clamped so date arithmetic never leaves the
/// representable range; there are no error paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthView {
    year: i32,
    month0: u8,
}

impl MonthView {
    /// Create a view, normalizing the month index into the year.
    #[must_use]
    pub fn new(year: i32, month0: i32) -> Self {
        let carry = month0.div_euclid(12);
        let month = month0.rem_euclid(12) as u8;
        Self {
            year: year.saturating_add(carry).clamp(-YEAR_CLAMP, YEAR_CLAMP),
            month0: month,
        }
    }

    /// Create a view for the month containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0() as i32)
    }

    /// The year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The 0-based month index (0 = January).
    #[must_use]
    pub const fn month0(&self) -> u8 {
        self.month0
    }

    /// Full month name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.month0)]
    }

    /// The first day of the month.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month0) + 1, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Number of days in the month (28-31).
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        let next_first = self.next().first_day();
        next_first
            .signed_duration_since(self.first_day())
            .num_days()
            .clamp(28, 31) as u32
    }

    /// The previous month.
    #[must_use]
    pub fn prev(&self) -> Self {
        Self::new(self.year, i32::from(self.month0) - 1)
    }

    /// The following month.
    #[must_use]
    pub fn next(&self) -> Self {
        Self::new(self.year, i32::from(self.month0) + 1)
    }

    /// Check whether `date` falls in this month.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == u32::from(self.month0)
    }
}

impl fmt::Display for MonthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

/// The caller's date selection: absent, a single date, or a set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    None,
    /// A single selected date.
    Single(NaiveDate),
    /// A set of selected dates.
    Many(BTreeSet<NaiveDate>),
}

impl Selection {
    /// Check whether `date` is selected, by date-component equality.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Self::None => false,
            Self::Single(d) => *d == date,
            Self::Many(set) => set.contains(&date),
        }
    }

    /// Check whether anything is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Single(_) => false,
            Self::Many(set) => set.is_empty(),
        }
    }
}

impl From<NaiveDate> for Selection {
    fn from(date: NaiveDate) -> Self {
        Self::Single(date)
    }
}

impl FromIterator<NaiveDate> for Selection {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self::Many(iter.into_iter().collect())
    }
}

/// The caller's disabled rule: nothing, everything, or a predicate.
///
/// Bounds (`min_date`/`max_date` in [`GridOptions`]) are evaluated
/// independently; the rule can only add disables on top of them.
#[derive(Clone, Default)]
pub enum DisabledRule {
    /// No dates disabled by the rule.
    #[default]
    None,
    /// Every date disabled.
    All,
    /// Dates for which the predicate returns true are disabled.
    Predicate(Arc<dyn Fn(NaiveDate) -> bool + Send + Sync>),
}

impl DisabledRule {
    /// Wrap a predicate.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(NaiveDate) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    /// Evaluate the rule for one date.
    #[must_use]
    pub fn applies(&self, date: NaiveDate) -> bool {
        match self {
            Self::None => false,
            Self::All => true,
            Self::Predicate(f) => f(date),
        }
    }
}

impl fmt::Debug for DisabledRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("DisabledRule::None"),
            Self::All => f.write_str("DisabledRule::All"),
            Self::Predicate(_) => f.write_str("DisabledRule::Predicate(..)"),
        }
    }
}

/// Configuration for one grid build.
#[derive(Clone, Debug, Default)]
pub struct GridOptions {
    /// Week-start offset: 0 = Sunday ... 6 = Saturday (reduced mod 7).
    pub week_starts_on: u8,
    /// The current selection.
    pub selection: Selection,
    /// The disabled rule.
    pub disabled: DisabledRule,
    /// Dates before this are disabled.
    pub min_date: Option<NaiveDate>,
    /// Dates after this are disabled.
    pub max_date: Option<NaiveDate>,
}

impl GridOptions {
    /// Set the week-start day.
    #[must_use]
    pub fn with_week_start(mut self, week_starts_on: u8) -> Self {
        self.week_starts_on = week_starts_on;
        self
    }

    /// Set the selection.
    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Set the disabled rule.
    #[must_use]
    pub fn with_disabled(mut self, disabled: DisabledRule) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the inclusive date bounds.
    #[must_use]
    pub const fn with_bounds(mut self, min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        self.min_date = min;
        self.max_date = max;
        self
    }

    /// Disabled state for one date: union of bounds and rule.
    ///
    /// Bounds always win; the rule can only add disables on top. Bounds
    /// are day-granular, so "before min / after max" is an inclusive
    /// window check.
    #[must_use]
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        if self.min_date.is_some_and(|min| date < min) {
            return true;
        }
        if self.max_date.is_some_and(|max| date > max) {
            return true;
        }
        self.disabled.applies(date)
    }
}

/// A built month grid: the 42 cells plus the rotated header labels.
#[derive(Clone, Debug)]
pub struct MonthGrid {
    /// The viewed month.
    pub view: MonthView,
    /// Exactly [`GRID_CELLS`] cells in ascending date order.
    pub days: Vec<CalendarDay>,
    /// Weekday labels rotated to start at the configured week start.
    pub weekdays: [&'static str; 7],
}

impl MonthGrid {
    /// The week rows of the grid, each exactly 7 cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }
}

/// Rotate the canonical weekday labels by the week-start offset.
#[must_use]
pub fn weekday_labels(week_starts_on: u8) -> [&'static str; 7] {
    let start = usize::from(week_starts_on % 7);
    std::array::from_fn(|i| DAY_NAMES[(start + i) % 7])
}

/// Build the 42-cell grid for `view`.
///
/// `today` is the reference date for the today flag; pass
/// [`Clock::today`] from the clock of your choice. Deterministic given
/// its arguments, touches no ambient state, and has no error paths: any
/// input yields a structurally valid grid.
#[must_use]
pub fn month_grid(view: MonthView, options: &GridOptions, today: NaiveDate) -> MonthGrid {
    let week_start = u32::from(options.week_starts_on % 7);
    let first = view.first_day();
    let first_weekday = first.weekday().num_days_from_sunday();
    let offset = (first_weekday + 7 - week_start) % 7;

    let start = first
        .checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN);

    let mut days = Vec::with_capacity(GRID_CELLS);
    let mut date = start;
    for _ in 0..GRID_CELLS {
        let mut flags = DayFlags::empty();
        if view.contains(date) {
            flags |= DayFlags::CURRENT_MONTH;
        }
        if date == today {
            flags |= DayFlags::TODAY;
        }
        if options.selection.contains(date) {
            flags |= DayFlags::SELECTED;
        }
        if options.is_disabled(date) {
            flags |= DayFlags::DISABLED;
        }
        days.push(CalendarDay { date, flags });
        date = date.checked_add_days(Days::new(1)).unwrap_or(date);
    }

    MonthGrid {
        view,
        days,
        weekdays: weekday_labels(options.week_starts_on),
    }
}

/// Source of the reference date for the today flag.
///
/// The grid builder never reads the wall clock itself; substituting
/// [`FixedClock`] makes every computation deterministic in tests.
pub trait Clock {
    /// The current date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock dates in the local timezone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A pinned date, for tests and reproducible rendering.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn test_month_view_normalizes_overflow() {
        let view = MonthView::new(2024, 12);
        assert_eq!((view.year(), view.month0()), (2025, 0));

        let view = MonthView::new(2024, -1);
        assert_eq!((view.year(), view.month0()), (2023, 11));

        let view = MonthView::new(2024, 25);
        assert_eq!((view.year(), view.month0()), (2026, 1));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthView::new(2024, 1).days_in_month(), 29);
        assert_eq!(MonthView::new(2023, 1).days_in_month(), 28);
        assert_eq!(MonthView::new(2024, 0).days_in_month(), 31);
        assert_eq!(MonthView::new(2024, 3).days_in_month(), 30);
    }

    #[test]
    fn test_grid_starts_on_week_start() {
        // February 2024: the 1st is a Thursday.
        let view = MonthView::new(2024, 1);
        let grid = month_grid(view, &GridOptions::default(), date(2024, 2, 14));
        assert_eq!(grid.days[0].date, date(2024, 1, 28));
        assert_eq!(grid.days[41].date, date(2024, 3, 9));

        let monday = GridOptions::default().with_week_start(1);
        let grid = month_grid(view, &monday, date(2024, 2, 14));
        assert_eq!(grid.days[0].date, date(2024, 1, 29));
        assert_eq!(grid.weekdays[0], "Mon");
    }

    #[test]
    fn test_weekday_labels_rotation() {
        assert_eq!(weekday_labels(0)[0], "Sun");
        assert_eq!(weekday_labels(1), ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!(weekday_labels(6)[0], "Sat");
        // Reduced mod 7.
        assert_eq!(weekday_labels(7)[0], "Sun");
    }

    #[test]
    fn test_today_flag_uses_reference_date() {
        let view = MonthView::new(2024, 1);
        let grid = month_grid(view, &GridOptions::default(), date(2024, 2, 14));
        let todays: Vec<_> = grid.days.iter().filter(|d| d.is_today()).collect();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].date, date(2024, 2, 14));

        // Reference date outside the window: no cell flagged.
        let grid = month_grid(view, &GridOptions::default(), date(2030, 6, 1));
        assert!(grid.days.iter().all(|d| !d.is_today()));
    }

    #[test]
    fn test_selection_single_and_many() {
        let view = MonthView::new(2024, 1);
        let opts = GridOptions::default().with_selection(date(2024, 2, 10).into());
        let grid = month_grid(view, &opts, date(2024, 2, 14));
        let selected: Vec<_> = grid.days.iter().filter(|d| d.is_selected()).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, date(2024, 2, 10));

        let many: Selection = [date(2024, 2, 1), date(2024, 3, 1)].into_iter().collect();
        let opts = GridOptions::default().with_selection(many);
        let grid = month_grid(view, &opts, date(2024, 2, 14));
        assert_eq!(grid.days.iter().filter(|d| d.is_selected()).count(), 2);
    }

    #[test]
    fn test_bounds_win_over_false_predicate() {
        let view = MonthView::new(2024, 2);
        // Predicate disables nothing; bounds still apply.
        let opts = GridOptions::default()
            .with_disabled(DisabledRule::predicate(|_| false))
            .with_bounds(Some(date(2024, 3, 10)), Some(date(2024, 3, 20)));
        let grid = month_grid(view, &opts, date(2024, 3, 15));
        for day in &grid.days {
            let inside = day.date >= date(2024, 3, 10) && day.date <= date(2024, 3, 20);
            assert_eq!(day.is_disabled(), !inside, "date {}", day.date);
        }
    }

    #[test]
    fn test_predicate_adds_on_top_of_bounds() {
        let view = MonthView::new(2024, 2);
        let opts = GridOptions::default()
            .with_disabled(DisabledRule::predicate(|d| d == date(2024, 3, 15)))
            .with_bounds(Some(date(2024, 3, 10)), Some(date(2024, 3, 20)));
        let grid = month_grid(view, &opts, date(2024, 3, 1));
        let in_window_disabled: Vec<_> = grid
            .days
            .iter()
            .filter(|d| d.date >= date(2024, 3, 10) && d.date <= date(2024, 3, 20))
            .filter(|d| d.is_disabled())
            .map(|d| d.date)
            .collect();
        assert_eq!(in_window_disabled, vec![date(2024, 3, 15)]);
    }

    #[test]
    fn test_disabled_all_fixed_boolean() {
        let view = MonthView::new(2024, 1);
        let opts = GridOptions::default().with_disabled(DisabledRule::All);
        let grid = month_grid(view, &opts, date(2024, 2, 14));
        assert!(grid.days.iter().all(CalendarDay::is_disabled));
    }

    #[test]
    fn test_current_month_run_is_contiguous() {
        let view = MonthView::new(2024, 1);
        let grid = month_grid(view, &GridOptions::default(), date(2024, 2, 14));
        let first_current = grid.days.iter().position(CalendarDay::is_current_month);
        let last_current = grid.days.iter().rposition(CalendarDay::is_current_month);
        let (lo, hi) = (first_current.expect("has run"), last_current.expect("has run"));
        assert_eq!(hi - lo + 1, 29);
        assert!(grid.days[lo..=hi].iter().all(CalendarDay::is_current_month));
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date(2001, 9, 9));
        assert_eq!(clock.today(), date(2001, 9, 9));
    }
}

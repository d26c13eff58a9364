//! Calendar month-view widget.
//!
//! [`Calendar`] owns the navigation cursor (the viewed month), the
//! selection, and the disabled configuration, and renders the grid
//! produced by [`month_grid`]. The grid itself is recomputed on demand;
//! the widget never caches it.

pub mod grid;

pub use grid::{
    CalendarDay, Clock, DAY_NAMES, DayFlags, DisabledRule, FixedClock, GRID_CELLS, GridOptions,
    MONTH_NAMES, MonthGrid, MonthView, Selection, SystemClock, month_grid, weekday_labels,
};

use crate::class::ClassList;
use crate::event::emit_event;
use crate::keys::{KeyCode, KeyEvent};
use crate::render::{Rect, Surface, Widget};
use crate::theme::Theme;
use chrono::{Datelike, NaiveDate};

/// Width of one day cell in the rendered grid, including its gap.
const CELL_WIDTH: i32 = 4;

/// Stateful month-view calendar.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use vulcan_tui::calendar::{Calendar, FixedClock, MonthView};
///
/// let today = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
/// let mut cal = Calendar::with_clock(MonthView::new(2024, 1), &FixedClock(today));
/// assert!(cal.choose(today));
/// cal.next_month();
/// assert_eq!(cal.view().month0(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Calendar {
    view: MonthView,
    options: GridOptions,
    today: NaiveDate,
}

impl Calendar {
    /// Create a calendar viewing `view`, with the system clock.
    #[must_use]
    pub fn new(view: MonthView) -> Self {
        Self::with_clock(view, &SystemClock)
    }

    /// Create a calendar with an injected clock.
    #[must_use]
    pub fn with_clock(view: MonthView, clock: &dyn Clock) -> Self {
        Self {
            view,
            options: GridOptions::default(),
            today: clock.today(),
        }
    }

    /// Replace the grid options.
    #[must_use]
    pub fn with_options(mut self, options: GridOptions) -> Self {
        self.options = options;
        self
    }

    /// The viewed month.
    #[must_use]
    pub const fn view(&self) -> MonthView {
        self.view
    }

    /// The grid options.
    #[must_use]
    pub const fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Mutable access to the grid options.
    pub const fn options_mut(&mut self) -> &mut GridOptions {
        &mut self.options
    }

    /// The current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.options.selection
    }

    /// Re-read the reference date from a clock.
    pub fn refresh_today(&mut self, clock: &dyn Clock) {
        self.today = clock.today();
    }

    /// Navigate to the previous month.
    pub fn prev_month(&mut self) {
        self.view = self.view.prev();
        emit_event("calendar.view", &self.view.to_string());
    }

    /// Navigate to the following month.
    pub fn next_month(&mut self) {
        self.view = self.view.next();
        emit_event("calendar.view", &self.view.to_string());
    }

    /// Jump to the month containing `date`.
    pub fn show_month_of(&mut self, date: NaiveDate) {
        self.view = MonthView::containing(date);
    }

    /// Choose a date, replacing the selection.
    ///
    /// Choosing a disabled date is a no-op and returns false.
    pub fn choose(&mut self, date: NaiveDate) -> bool {
        if self.options.is_disabled(date) {
            return false;
        }
        self.options.selection = Selection::Single(date);
        emit_event("calendar.select", &date.to_string());
        true
    }

    /// Add a date to a multi-selection (converting as needed).
    ///
    /// Disabled dates are rejected as in [`Calendar::choose`].
    pub fn choose_additional(&mut self, date: NaiveDate) -> bool {
        if self.options.is_disabled(date) {
            return false;
        }
        let mut set = match std::mem::take(&mut self.options.selection) {
            Selection::None => std::collections::BTreeSet::new(),
            Selection::Single(d) => std::collections::BTreeSet::from([d]),
            Selection::Many(set) => set,
        };
        set.insert(date);
        self.options.selection = Selection::Many(set);
        emit_event("calendar.select", &date.to_string());
        true
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.options.selection = Selection::None;
    }

    /// Build the grid for the current view.
    #[must_use]
    pub fn grid(&self) -> MonthGrid {
        month_grid(self.view, &self.options, self.today)
    }

    /// Month navigation: Left/PageUp for previous, Right/PageDown for next.
    ///
    /// Returns true when the event changed the view.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        match event.code {
            KeyCode::Left | KeyCode::PageUp => {
                self.prev_month();
                true
            }
            KeyCode::Right | KeyCode::PageDown => {
                self.next_month();
                true
            }
            _ => false,
        }
    }

    /// Rendered width in cells.
    #[must_use]
    pub const fn preferred_width() -> u32 {
        CELL_WIDTH as u32 * 7
    }

    fn day_classes(day: &CalendarDay) -> String {
        ClassList::new()
            .add("text-foreground")
            .add_if("text-muted", !day.is_current_month())
            .add_if("ring", day.is_today())
            .add_if("bg-accent text-accent-foreground", day.is_selected())
            .add_if("disabled", day.is_disabled())
            .merge()
    }
}

impl Widget for Calendar {
    fn render(&self, surface: &mut Surface, area: Rect, theme: &Theme) {
        if area.width < 7 || area.height < 8 {
            return;
        }
        let grid = self.grid();
        let header_style = theme.resolve("text-foreground font-bold");
        let chevron_style = theme.resolve("text-muted");

        // Header: "< February 2024 >"
        let title = grid.view.to_string();
        surface.put(area.x, area.y, '<', chevron_style);
        surface.put(area.right() - 1, area.y, '>', chevron_style);
        let title_x = area.x + (area.width as i32 - title.chars().count() as i32) / 2;
        surface.draw_text(title_x, area.y, &title, header_style);

        // Weekday labels.
        let label_style = theme.resolve("text-muted");
        for (i, label) in grid.weekdays.iter().enumerate() {
            let x = area.x + i as i32 * CELL_WIDTH;
            surface.draw_text(x, area.y + 1, label, label_style);
        }

        // Day cells, one row per week.
        for (row, week) in grid.weeks().enumerate() {
            let y = area.y + 2 + row as i32;
            for (col, day) in week.iter().enumerate() {
                let x = area.x + col as i32 * CELL_WIDTH;
                let style = theme.resolve(&Self::day_classes(day));
                let label = format!("{:>2}", day.date.day());
                surface.draw_text(x, y, &label, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn fixed_calendar() -> Calendar {
        Calendar::with_clock(MonthView::new(2024, 1), &FixedClock(date(2024, 2, 14)))
    }

    #[test]
    fn test_navigation_rolls_across_years() {
        let mut cal = Calendar::with_clock(MonthView::new(2024, 0), &FixedClock(date(2024, 1, 1)));
        cal.prev_month();
        assert_eq!((cal.view().year(), cal.view().month0()), (2023, 11));
        cal.next_month();
        cal.next_month();
        assert_eq!((cal.view().year(), cal.view().month0()), (2024, 1));
    }

    #[test]
    fn test_choose_rejects_disabled() {
        let mut cal = fixed_calendar();
        *cal.options_mut() = GridOptions::default()
            .with_bounds(Some(date(2024, 2, 10)), Some(date(2024, 2, 20)));
        assert!(!cal.choose(date(2024, 2, 1)));
        assert!(cal.selection().is_empty());
        assert!(cal.choose(date(2024, 2, 15)));
        assert_eq!(*cal.selection(), Selection::Single(date(2024, 2, 15)));
    }

    #[test]
    fn test_choose_additional_builds_set() {
        let mut cal = fixed_calendar();
        assert!(cal.choose(date(2024, 2, 1)));
        assert!(cal.choose_additional(date(2024, 2, 2)));
        match cal.selection() {
            Selection::Many(set) => assert_eq!(set.len(), 2),
            other => panic!("expected Many, got {other:?}"),
        }
    }

    #[test]
    fn test_handle_key_navigation() {
        let mut cal = fixed_calendar();
        assert!(cal.handle_key(KeyCode::Right.into()));
        assert_eq!(cal.view().month0(), 2);
        assert!(cal.handle_key(KeyCode::Left.into()));
        assert_eq!(cal.view().month0(), 1);
        assert!(!cal.handle_key(KeyCode::Enter.into()));
    }

    #[test]
    fn test_render_contains_title_and_today() {
        use crate::render::Surface;
        use crate::theme::Theme;

        let cal = fixed_calendar();
        let mut surface = Surface::new(30, 9);
        cal.render(&mut surface, Rect::new(0, 0, 28, 8), &Theme::light());
        let text = surface.to_text();
        assert!(text.contains("February 2024"));
        assert!(text.contains("Sun"));
        assert!(text.contains("14"));
    }
}

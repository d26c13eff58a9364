//! Date picker: a text trigger opening a calendar popover.

use crate::calendar::{Calendar, Clock, MonthView, Selection, SystemClock};
use crate::class::ClassList;
use crate::event::emit_event;
use crate::keys::{KeyCode, KeyEvent};
use crate::render::{Rect, Surface, Widget};
use crate::theme::Theme;
use chrono::{Datelike, NaiveDate};

/// Render a date through a token format string.
///
/// Tokens: `yyyy` (4-digit year), `MM` (2-digit month), `M` (month),
/// `dd` (2-digit day), `d` (day). Longest token wins; everything else is
/// copied through.
#[must_use]
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::with_capacity(format.len() + 4);
    let mut rest = format;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("yyyy") {
            out.push_str(&format!("{:04}", date.year()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("MM") {
            out.push_str(&format!("{:02}", date.month()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("dd") {
            out.push_str(&format!("{:02}", date.day()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('M') {
            out.push_str(&date.month().to_string());
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('d') {
            out.push_str(&date.day().to_string());
            rest = tail;
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }
    }
    out
}

/// Date picker widget state.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use vulcan_tui::calendar::{FixedClock, MonthView};
/// use vulcan_tui::widgets::DatePicker;
///
/// let today = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
/// let mut picker = DatePicker::with_clock("Select date", &FixedClock(today));
/// picker.open();
/// assert!(picker.set_date(today));
/// assert!(!picker.is_open(), "selecting closes the popover");
/// assert_eq!(picker.display(), "02/14/2024");
/// ```
#[derive(Clone, Debug)]
pub struct DatePicker {
    placeholder: String,
    calendar: Calendar,
    open: bool,
    clearable: bool,
    format: String,
    disabled: bool,
}

impl DatePicker {
    /// Create an empty picker viewing the current month.
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self::with_clock(placeholder, &SystemClock)
    }

    /// Create a picker with an injected clock.
    #[must_use]
    pub fn with_clock(placeholder: impl Into<String>, clock: &dyn Clock) -> Self {
        let today = clock.today();
        Self {
            placeholder: placeholder.into(),
            calendar: Calendar::with_clock(MonthView::containing(today), clock),
            open: false,
            clearable: true,
            format: "MM/dd/yyyy".to_string(),
            disabled: false,
        }
    }

    /// Set the format string.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Allow clearing the value.
    #[must_use]
    pub const fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Set the disabled flag.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The embedded calendar.
    #[must_use]
    pub const fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Mutable access to the embedded calendar (bounds, week start...).
    pub const fn calendar_mut(&mut self) -> &mut Calendar {
        &mut self.calendar
    }

    /// The selected date.
    #[must_use]
    pub fn value(&self) -> Option<NaiveDate> {
        match self.calendar.selection() {
            Selection::Single(date) => Some(*date),
            _ => None,
        }
    }

    /// Whether the popover is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Trigger text: the formatted value or the placeholder.
    #[must_use]
    pub fn display(&self) -> String {
        self.value()
            .map_or_else(|| self.placeholder.clone(), |d| format_date(d, &self.format))
    }

    /// Open the popover on the selected (or current) month.
    pub fn open(&mut self) {
        if self.disabled {
            return;
        }
        if let Some(date) = self.value() {
            self.calendar.show_month_of(date);
        }
        self.open = true;
    }

    /// Close the popover.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Select a date and close the popover.
    ///
    /// Disabled dates are rejected by the embedded calendar.
    pub fn set_date(&mut self, date: NaiveDate) -> bool {
        if !self.calendar.choose(date) {
            return false;
        }
        self.open = false;
        emit_event("date.change", &date.to_string());
        true
    }

    /// Clear the value (when clearable).
    pub fn clear(&mut self) {
        if self.clearable {
            self.calendar.clear_selection();
            emit_event("date.change", "");
        }
    }

    /// Keyboard protocol: Enter toggles, Esc closes, month navigation
    /// is forwarded to the calendar while open.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        if self.disabled {
            return false;
        }
        match event.code {
            KeyCode::Enter => {
                if self.open {
                    self.close();
                } else {
                    self.open();
                }
                true
            }
            KeyCode::Esc if self.open => {
                self.close();
                true
            }
            _ if self.open => self.calendar.handle_key(event),
            _ => false,
        }
    }
}

impl Widget for DatePicker {
    fn render(&self, surface: &mut Surface, area: Rect, theme: &Theme) {
        let classes = ClassList::new()
            .add("text-foreground")
            .add_if("text-muted", self.value().is_none())
            .add_if("disabled", self.disabled)
            .merge();
        surface.draw_text(area.x, area.y, &self.display(), theme.resolve(&classes));
        surface.put(area.right() - 1, area.y, '▦', theme.resolve("text-muted"));

        if self.open {
            let panel = Rect::new(area.x, area.y + 1, Calendar::preferred_width() + 2, 10);
            surface.fill_rect(panel, ' ', theme.resolve("bg-surface"));
            surface.draw_box(panel, theme.resolve("border bg-surface"));
            self.calendar.render(surface, panel.inset(1), theme);
        }
    }
}

//! Time picker: hour/minute selection with 12/24-hour display.
//!
//! Time is stored in 24-hour form; the picker converts at the display
//! edge. The minute column is generated from a validated step.

use crate::class::ClassList;
use crate::error::{Error, Result};
use crate::event::emit_event;
use crate::keys::{KeyCode, KeyEvent};
use crate::render::{Rect, Surface, Widget};
use crate::theme::Theme;
use std::fmt;

/// AM/PM half of the day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        })
    }
}

/// A wall-clock time of day, stored as 24-hour hour and minute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time {
    hour: u8,
    minute: u8,
}

impl Time {
    /// Create a time, validating the component ranges.
    pub const fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Hour in 24-hour form (0-23).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Hour in 12-hour form (1-12).
    #[must_use]
    pub const fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    /// The half of day this time falls in.
    #[must_use]
    pub const fn period(&self) -> Period {
        if self.hour < 12 { Period::Am } else { Period::Pm }
    }

    /// Format as "HH:MM" (24-hour) or "hh:MM AM" (12-hour).
    #[must_use]
    pub fn format(&self, use_24_hour: bool) -> String {
        if use_24_hour {
            format!("{:02}:{:02}", self.hour, self.minute)
        } else {
            format!("{:02}:{:02} {}", self.hour12(), self.minute, self.period())
        }
    }

    /// Parse "HH:MM", "h:MM AM" or "h:MM pm".
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidTimeFormat(s.to_string());
        let trimmed = s.trim();
        let (clock, period) = match trimmed.split_once(' ') {
            Some((clock, suffix)) => {
                let period = match suffix.trim().to_ascii_uppercase().as_str() {
                    "AM" => Period::Am,
                    "PM" => Period::Pm,
                    _ => return Err(invalid()),
                };
                (clock, Some(period))
            }
            None => (trimmed, None),
        };
        let (h, m) = clock.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = h.parse().map_err(|_| invalid())?;
        let minute: u8 = m.parse().map_err(|_| invalid())?;
        let hour = match period {
            None => hour,
            Some(p) => {
                if hour == 0 || hour > 12 {
                    return Err(invalid());
                }
                match (p, hour) {
                    (Period::Am, 12) => 0,
                    (Period::Pm, 12) => 12,
                    (Period::Am, h) => h,
                    (Period::Pm, h) => h + 12,
                }
            }
        };
        Self::new(hour, minute)
    }
}

/// Granularity of the minute option column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MinuteStep {
    One,
    Five,
    Ten,
    #[default]
    Fifteen,
    Twenty,
    Thirty,
}

impl MinuteStep {
    /// The step in minutes.
    #[must_use]
    pub const fn minutes(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Five => 5,
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::Twenty => 20,
            Self::Thirty => 30,
        }
    }

    /// Validate a raw step value.
    pub const fn from_minutes(step: u8) -> Result<Self> {
        match step {
            1 => Ok(Self::One),
            5 => Ok(Self::Five),
            10 => Ok(Self::Ten),
            15 => Ok(Self::Fifteen),
            20 => Ok(Self::Twenty),
            30 => Ok(Self::Thirty),
            other => Err(Error::InvalidMinuteStep(other)),
        }
    }
}

/// Time picker widget state.
///
/// # Examples
///
/// ```
/// use vulcan_tui::widgets::{MinuteStep, Time, TimePicker};
///
/// let mut picker = TimePicker::new("Select time").minute_step(MinuteStep::Thirty);
/// assert_eq!(picker.minute_options(), vec![0, 30]);
///
/// picker.set_time(Time::new(14, 30).unwrap());
/// assert_eq!(picker.display(), "02:30 PM");
/// ```
#[derive(Clone, Debug)]
pub struct TimePicker {
    placeholder: String,
    value: Option<Time>,
    open: bool,
    use_24_hour: bool,
    clearable: bool,
    minute_step: MinuteStep,
    disabled: bool,
}

impl TimePicker {
    /// Create an empty picker.
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: None,
            open: false,
            use_24_hour: false,
            clearable: true,
            minute_step: MinuteStep::default(),
            disabled: false,
        }
    }

    /// Use 24-hour display.
    #[must_use]
    pub const fn use_24_hour(mut self, on: bool) -> Self {
        self.use_24_hour = on;
        self
    }

    /// Allow clearing the value.
    #[must_use]
    pub const fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Set the minute column step.
    #[must_use]
    pub const fn minute_step(mut self, step: MinuteStep) -> Self {
        self.minute_step = step;
        self
    }

    /// Set the disabled flag.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The current value.
    #[must_use]
    pub const fn value(&self) -> Option<Time> {
        self.value
    }

    /// Whether the option panel is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Trigger text: the formatted value or the placeholder.
    #[must_use]
    pub fn display(&self) -> String {
        self.value.map_or_else(
            || self.placeholder.clone(),
            |t| t.format(self.use_24_hour),
        )
    }

    /// The hour option column for the current clock mode.
    #[must_use]
    pub fn hour_options(&self) -> Vec<u8> {
        if self.use_24_hour {
            (0..24).collect()
        } else {
            std::iter::once(12).chain(1..12).collect()
        }
    }

    /// The minute option column.
    #[must_use]
    pub fn minute_options(&self) -> Vec<u8> {
        (0..60).step_by(usize::from(self.minute_step.minutes())).collect()
    }

    /// Open the option panel.
    pub fn open(&mut self) {
        if !self.disabled {
            self.open = true;
        }
    }

    /// Close the option panel.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Set the value directly.
    pub fn set_time(&mut self, time: Time) {
        self.value = Some(time);
        emit_event("time.change", &time.format(true));
    }

    /// Set the hour from a display-hour option, keeping minute/period.
    pub fn set_hour(&mut self, display_hour: u8) {
        let current = self.value.unwrap_or(Time { hour: 0, minute: 0 });
        let hour = if self.use_24_hour {
            display_hour.min(23)
        } else {
            let base = display_hour % 12;
            match current.period() {
                Period::Am => base,
                Period::Pm => base + 12,
            }
        };
        self.set_time(Time {
            hour,
            minute: current.minute,
        });
    }

    /// Set the minute, keeping the hour.
    pub fn set_minute(&mut self, minute: u8) {
        let current = self.value.unwrap_or(Time { hour: 0, minute: 0 });
        self.set_time(Time {
            hour: current.hour,
            minute: minute.min(59),
        });
    }

    /// Switch the AM/PM half, keeping the displayed hour.
    pub fn set_period(&mut self, period: Period) {
        let current = self.value.unwrap_or(Time { hour: 0, minute: 0 });
        let hour = match (period, current.hour) {
            (Period::Am, h) if h >= 12 => h - 12,
            (Period::Pm, h) if h < 12 => h + 12,
            (_, h) => h,
        };
        self.set_time(Time {
            hour,
            minute: current.minute,
        });
    }

    /// Clear the value (when clearable).
    pub fn clear(&mut self) {
        if self.clearable {
            self.value = None;
            emit_event("time.change", "");
        }
    }

    /// Enter toggles the panel, Esc closes it.
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
            _ => false,
        }
    }
}

impl Widget for TimePicker {
    fn render(&self, surface: &mut Surface, area: Rect, theme: &Theme) {
        let classes = ClassList::new()
            .add("text-foreground")
            .add_if("text-muted", self.value.is_none())
            .add_if("disabled", self.disabled)
            .merge();
        surface.draw_text(area.x, area.y, &self.display(), theme.resolve(&classes));
        surface.put(area.right() - 1, area.y, '◷', theme.resolve("text-muted"));

        if !self.open {
            return;
        }
        let panel = Rect::new(area.x, area.y + 1, area.width.max(14), 8);
        surface.fill_rect(panel, ' ', theme.resolve("bg-surface"));
        surface.draw_box(panel, theme.resolve("border bg-surface"));
        let option_style = theme.resolve("text-foreground bg-surface");
        for (i, hour) in self.hour_options().iter().take(6).enumerate() {
            surface.draw_text(
                panel.x + 1,
                panel.y + 1 + i as i32,
                &format!("{hour:02}"),
                option_style,
            );
        }
        for (i, minute) in self.minute_options().iter().take(6).enumerate() {
            surface.draw_text(
                panel.x + 5,
                panel.y + 1 + i as i32,
                &format!("{minute:02}"),
                option_style,
            );
        }
        if !self.use_24_hour {
            surface.draw_text(panel.x + 9, panel.y + 1, "AM", option_style);
            surface.draw_text(panel.x + 9, panel.y + 2, "PM", option_style);
        }
    }
}

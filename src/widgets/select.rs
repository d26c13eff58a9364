//! Select: a dropdown choosing one option from a list.
//!
//! The trigger shows the current value (or a placeholder); the open
//! dropdown tracks a highlighted row driven by the keyboard protocol:
//! Up/Down move over enabled options and clamp at the ends, Enter
//! commits and closes, Esc closes without committing.

use crate::class::ClassList;
use crate::event::emit_event;
use crate::keys::{KeyCode, KeyEvent};
use crate::render::{Rect, Surface, Widget};
use crate::theme::Theme;

/// One selectable option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Stable value reported on commit.
    pub value: String,
    /// Label shown in the trigger and dropdown.
    pub label: String,
    /// Disabled options are skipped by navigation and refuse commits.
    pub disabled: bool,
}

impl SelectOption {
    /// Create an enabled option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Create a disabled option.
    #[must_use]
    pub fn disabled(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            disabled: true,
            ..Self::new(value, label)
        }
    }
}

/// Select widget state.
///
/// # Examples
///
/// ```
/// use vulcan_tui::keys::KeyCode;
/// use vulcan_tui::widgets::{Select, SelectOption};
///
/// let mut select = Select::new("Pick a fruit")
///     .option(SelectOption::new("apple", "Apple"))
///     .option(SelectOption::new("pear", "Pear"));
///
/// select.open();
/// select.handle_key(KeyCode::Down.into());
/// select.handle_key(KeyCode::Enter.into());
/// assert_eq!(select.value(), Some("pear"));
/// assert!(!select.is_open());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Select {
    placeholder: String,
    options: Vec<SelectOption>,
    value: Option<String>,
    open: bool,
    highlighted: usize,
    disabled: bool,
}

impl Select {
    /// Create an empty select with a placeholder label.
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    /// Append an option.
    #[must_use]
    pub fn option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    /// Set the initial value (unknown values are ignored).
    #[must_use]
    pub fn default_value(mut self, value: &str) -> Self {
        if self.options.iter().any(|o| o.value == value) {
            self.value = Some(value.to_string());
        }
        self
    }

    /// Disable the whole control.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The committed value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Label for the committed value, or the placeholder.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.value
            .as_deref()
            .and_then(|v| self.options.iter().find(|o| o.value == v))
            .map_or(&self.placeholder, |o| o.label.as_str())
    }

    /// Whether the dropdown is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// The highlighted row index while open.
    #[must_use]
    pub const fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// The options.
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Open the dropdown, highlighting the committed value when present.
    pub fn open(&mut self) {
        if self.disabled || self.options.is_empty() {
            return;
        }
        self.open = true;
        self.highlighted = self
            .value
            .as_deref()
            .and_then(|v| self.options.iter().position(|o| o.value == v))
            .or_else(|| self.first_enabled())
            .unwrap_or(0);
    }

    /// Close the dropdown without committing.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Toggle the dropdown.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    fn first_enabled(&self) -> Option<usize> {
        self.options.iter().position(|o| !o.disabled)
    }

    fn move_highlight(&mut self, down: bool) -> bool {
        let mut idx = self.highlighted;
        loop {
            let next = if down {
                idx.checked_add(1).filter(|&i| i < self.options.len())
            } else {
                idx.checked_sub(1)
            };
            match next {
                Some(i) => {
                    idx = i;
                    if !self.options[idx].disabled {
                        self.highlighted = idx;
                        return true;
                    }
                }
                // Clamp at the ends instead of wrapping.
                None => return false,
            }
        }
    }

    /// Commit a value, closing the dropdown.
    ///
    /// Unknown or disabled values are rejected.
    pub fn commit(&mut self, value: &str) -> bool {
        let Some(option) = self.options.iter().find(|o| o.value == value) else {
            return false;
        };
        if option.disabled {
            return false;
        }
        self.value = Some(option.value.clone());
        self.open = false;
        emit_event("select.change", value);
        true
    }

    /// Keyboard protocol; returns whether the event was consumed.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        if self.disabled {
            return false;
        }
        if !self.open {
            return match event.code {
                KeyCode::Enter | KeyCode::Down | KeyCode::Char(' ') => {
                    self.open();
                    true
                }
                _ => false,
            };
        }
        match event.code {
            KeyCode::Up => {
                self.move_highlight(false);
                true
            }
            KeyCode::Down => {
                self.move_highlight(true);
                true
            }
            KeyCode::Enter => {
                if let Some(option) = self.options.get(self.highlighted) {
                    let value = option.value.clone();
                    self.commit(&value);
                }
                true
            }
            KeyCode::Esc => {
                self.close();
                true
            }
            _ => false,
        }
    }

    /// Place the dropdown below the trigger, flipping above when the
    /// viewport has no room below.
    #[must_use]
    pub fn dropdown_rect(&self, trigger: Rect, viewport: Rect) -> Rect {
        let height = self.options.len() as u32 + 2;
        let below = Rect::new(trigger.x, trigger.bottom(), trigger.width, height);
        if below.bottom() <= viewport.bottom() {
            below
        } else {
            Rect::new(trigger.x, trigger.y - height as i32, trigger.width, height)
        }
    }
}

impl Widget for Select {
    fn render(&self, surface: &mut Surface, area: Rect, theme: &Theme) {
        // Trigger row.
        let trigger_classes = ClassList::new()
            .add("text-foreground")
            .add_if("text-muted", self.value.is_none())
            .add_if("disabled", self.disabled)
            .merge();
        let trigger_style = theme.resolve(&trigger_classes);
        surface.draw_text(area.x, area.y, self.display_label(), trigger_style);
        let marker = if self.open { '▴' } else { '▾' };
        surface.put(area.right() - 1, area.y, marker, theme.resolve("text-muted"));

        if !self.open {
            return;
        }

        // Dropdown panel.
        let panel = self.dropdown_rect(Rect::new(area.x, area.y, area.width, 1), surface.area());
        surface.fill_rect(panel, ' ', theme.resolve("bg-surface"));
        surface.draw_box(panel, theme.resolve("border bg-surface"));
        for (i, option) in self.options.iter().enumerate() {
            let classes = ClassList::new()
                .add("text-foreground bg-surface")
                .add_if("bg-accent text-accent-foreground", i == self.highlighted)
                .add_if("disabled", option.disabled)
                .merge();
            let style = theme.resolve(&classes);
            surface.draw_text(panel.x + 1, panel.y + 1 + i as i32, &option.label, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_select() -> Select {
        Select::new("Pick one")
            .option(SelectOption::new("a", "Apple"))
            .option(SelectOption::disabled("b", "Banana"))
            .option(SelectOption::new("c", "Cherry"))
    }

    #[test]
    fn test_placeholder_until_committed() {
        let mut s = fruit_select();
        assert_eq!(s.display_label(), "Pick one");
        assert!(s.commit("c"));
        assert_eq!(s.display_label(), "Cherry");
    }

    #[test]
    fn test_navigation_skips_disabled_and_clamps() {
        let mut s = fruit_select();
        s.open();
        assert_eq!(s.highlighted(), 0);
        s.handle_key(KeyCode::Down.into());
        assert_eq!(s.highlighted(), 2, "skips the disabled Banana row");
        s.handle_key(KeyCode::Down.into());
        assert_eq!(s.highlighted(), 2, "clamps at the last row");
        s.handle_key(KeyCode::Up.into());
        assert_eq!(s.highlighted(), 0);
        s.handle_key(KeyCode::Up.into());
        assert_eq!(s.highlighted(), 0, "clamps at the first row");
    }

    #[test]
    fn test_enter_commits_and_closes() {
        let mut s = fruit_select();
        s.open();
        s.handle_key(KeyCode::Down.into());
        s.handle_key(KeyCode::Enter.into());
        assert_eq!(s.value(), Some("c"));
        assert!(!s.is_open());
    }

    #[test]
    fn test_esc_closes_without_committing() {
        let mut s = fruit_select();
        s.open();
        s.handle_key(KeyCode::Esc.into());
        assert!(!s.is_open());
        assert_eq!(s.value(), None);
    }

    #[test]
    fn test_commit_rejects_disabled() {
        let mut s = fruit_select();
        assert!(!s.commit("b"));
        assert!(!s.commit("zzz"));
        assert_eq!(s.value(), None);
    }

    #[test]
    fn test_disabled_control_ignores_keys() {
        let mut s = fruit_select().disabled(true);
        assert!(!s.handle_key(KeyCode::Enter.into()));
        assert!(!s.is_open());
    }

    #[test]
    fn test_open_highlights_committed_value() {
        let mut s = fruit_select().default_value("c");
        s.open();
        assert_eq!(s.highlighted(), 2);
    }

    #[test]
    fn test_dropdown_flips_above_when_no_room() {
        let s = fruit_select();
        let viewport = Rect::new(0, 0, 20, 10);
        let low_trigger = Rect::new(0, 8, 10, 1);
        let panel = s.dropdown_rect(low_trigger, viewport);
        assert!(panel.bottom() <= low_trigger.y, "flipped above the trigger");

        let high_trigger = Rect::new(0, 0, 10, 1);
        let panel = s.dropdown_rect(high_trigger, viewport);
        assert_eq!(panel.y, high_trigger.bottom());
    }
}

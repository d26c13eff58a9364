//! Tabs: one active panel out of an ordered set.

use crate::class::ClassList;
use crate::event::emit_event;
use crate::keys::{KeyCode, KeyEvent};
use crate::render::{Rect, Surface, Widget};
use crate::theme::Theme;

/// Tab list layout direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabOrientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Clone, Debug)]
struct Tab {
    value: String,
    label: String,
    disabled: bool,
}

/// Tabs widget state.
///
/// # Examples
///
/// ```
/// use vulcan_tui::widgets::Tabs;
///
/// let mut tabs = Tabs::new("one")
///     .tab("one", "One")
///     .tab("two", "Two")
///     .tab("three", "Three");
///
/// tabs.next();
/// assert_eq!(tabs.active(), "two");
/// assert!(!tabs.select("nope"));
/// ```
#[derive(Clone, Debug)]
pub struct Tabs {
    tabs: Vec<Tab>,
    active: String,
    orientation: TabOrientation,
}

impl Tabs {
    /// Create a tab set with the given default value active.
    #[must_use]
    pub fn new(default_value: impl Into<String>) -> Self {
        Self {
            tabs: Vec::new(),
            active: default_value.into(),
            orientation: TabOrientation::Horizontal,
        }
    }

    /// Append an enabled tab.
    #[must_use]
    pub fn tab(self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.tab_with(value, label, false)
    }

    /// Append a tab with an explicit disabled flag.
    #[must_use]
    pub fn tab_with(
        mut self,
        value: impl Into<String>,
        label: impl Into<String>,
        disabled: bool,
    ) -> Self {
        self.tabs.push(Tab {
            value: value.into(),
            label: label.into(),
            disabled,
        });
        self
    }

    /// Set the layout orientation.
    #[must_use]
    pub const fn orientation(mut self, orientation: TabOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// The active tab value.
    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Tab values in order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.tabs.iter().map(|t| t.value.as_str())
    }

    /// Activate a tab by value.
    ///
    /// Unknown or disabled values are rejected; returns whether the
    /// active tab changed.
    pub fn select(&mut self, value: &str) -> bool {
        let Some(tab) = self.tabs.iter().find(|t| t.value == value) else {
            return false;
        };
        if tab.disabled || self.active == value {
            return false;
        }
        self.active = value.to_string();
        emit_event("tabs.change", value);
        true
    }

    fn active_index(&self) -> Option<usize> {
        self.tabs.iter().position(|t| t.value == self.active)
    }

    fn step(&mut self, forward: bool) -> bool {
        if self.tabs.is_empty() {
            return false;
        }
        let len = self.tabs.len();
        let start = self.active_index().unwrap_or(0);
        let mut idx = start;
        for _ in 0..len {
            idx = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
            if !self.tabs[idx].disabled {
                let value = self.tabs[idx].value.clone();
                return self.select(&value);
            }
        }
        false
    }

    /// Activate the next enabled tab, wrapping around.
    pub fn next(&mut self) -> bool {
        self.step(true)
    }

    /// Activate the previous enabled tab, wrapping around.
    pub fn prev(&mut self) -> bool {
        self.step(false)
    }

    /// Arrow-key navigation along the orientation axis.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        let (forward, backward) = match self.orientation {
            TabOrientation::Horizontal => (KeyCode::Right, KeyCode::Left),
            TabOrientation::Vertical => (KeyCode::Down, KeyCode::Up),
        };
        if event.code == forward {
            self.next()
        } else if event.code == backward {
            self.prev()
        } else {
            false
        }
    }
}

impl Widget for Tabs {
    fn render(&self, surface: &mut Surface, area: Rect, theme: &Theme) {
        let mut x = area.x;
        let mut y = area.y;
        for tab in &self.tabs {
            let is_active = tab.value == self.active;
            let classes = ClassList::new()
                .add("text-muted")
                .add_if("text-foreground font-bold underline", is_active)
                .add_if("disabled", tab.disabled)
                .merge();
            let style = theme.resolve(&classes);
            match self.orientation {
                TabOrientation::Horizontal => {
                    x += surface.draw_text(x, y, &tab.label, style) as i32 + 2;
                }
                TabOrientation::Vertical => {
                    surface.draw_text(x, y, &tab.label, style);
                    y += 1;
                }
            }
        }
    }
}

//! Dialog and alert dialog overlays.
//!
//! A [`Dialog`] is dismissible: Esc closes it. An [`AlertDialog`]
//! requires an explicit action — it ignores Esc and resolves only
//! through its cancel/confirm buttons, cycling focus with Tab or the
//! arrow keys.

use crate::class::ClassList;
use crate::event::emit_event;
use crate::keys::{KeyCode, KeyEvent};
use crate::render::{Rect, Surface, Widget};
use crate::theme::Theme;

/// Modal dialog state.
///
/// # Examples
///
/// ```
/// use vulcan_tui::keys::KeyCode;
/// use vulcan_tui::widgets::Dialog;
///
/// let mut dialog = Dialog::new("Settings", "Adjust preferences below.");
/// dialog.open();
/// dialog.handle_key(KeyCode::Esc.into());
/// assert!(!dialog.is_open());
/// ```
#[derive(Clone, Debug)]
pub struct Dialog {
    title: String,
    description: String,
    open: bool,
}

impl Dialog {
    /// Create a closed dialog.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            open: false,
        }
    }

    /// Dialog title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the dialog is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Open the dialog.
    pub fn open(&mut self) {
        self.open = true;
        emit_event("dialog.open", &self.title);
    }

    /// Close the dialog.
    pub fn close(&mut self) {
        self.open = false;
        emit_event("dialog.close", &self.title);
    }

    /// Esc dismisses; returns whether the event was consumed.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        if self.open && event.code == KeyCode::Esc {
            self.close();
            return true;
        }
        false
    }

    /// The centered panel rectangle for this dialog.
    #[must_use]
    pub fn panel_rect(&self, viewport: Rect) -> Rect {
        let width = (self.description.chars().count() as u32 + 4)
            .max(self.title.chars().count() as u32 + 4)
            .min(viewport.width);
        viewport.centered(width, 5)
    }
}

impl Widget for Dialog {
    fn render(&self, surface: &mut Surface, area: Rect, theme: &Theme) {
        if !self.open {
            return;
        }
        let panel = self.panel_rect(area);
        surface.fill_rect(panel, ' ', theme.resolve("bg-surface"));
        surface.draw_box(panel, theme.resolve("border bg-surface"));
        let title_style = theme.resolve("text-foreground font-bold bg-surface");
        surface.draw_text(panel.x + 2, panel.y + 1, &self.title, title_style);
        let body_style = theme.resolve("text-muted bg-surface");
        surface.draw_text(panel.x + 2, panel.y + 3, &self.description, body_style);
    }
}

/// The action focused (and ultimately taken) in an alert dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertAction {
    #[default]
    Cancel,
    Confirm,
}

/// Alert dialog: a non-dismissible confirmation overlay.
///
/// # Examples
///
/// ```
/// use vulcan_tui::keys::KeyCode;
/// use vulcan_tui::widgets::{AlertAction, AlertDialog};
///
/// let mut alert = AlertDialog::new("Delete item?", "This cannot be undone.");
/// alert.open();
/// alert.handle_key(KeyCode::Esc.into()); // ignored
/// assert!(alert.is_open());
/// alert.handle_key(KeyCode::Tab.into());
/// let action = alert.handle_key(KeyCode::Enter.into());
/// assert_eq!(action, Some(AlertAction::Confirm));
/// ```
#[derive(Clone, Debug)]
pub struct AlertDialog {
    title: String,
    description: String,
    cancel_label: String,
    confirm_label: String,
    open: bool,
    focused: AlertAction,
}

impl AlertDialog {
    /// Create a closed alert with default button labels.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            cancel_label: "Cancel".to_string(),
            confirm_label: "Continue".to_string(),
            open: false,
            focused: AlertAction::Cancel,
        }
    }

    /// Override the button labels.
    #[must_use]
    pub fn labels(mut self, cancel: impl Into<String>, confirm: impl Into<String>) -> Self {
        self.cancel_label = cancel.into();
        self.confirm_label = confirm.into();
        self
    }

    /// Whether the alert is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// The currently focused action.
    #[must_use]
    pub const fn focused(&self) -> AlertAction {
        self.focused
    }

    /// Open the alert, focusing cancel.
    pub fn open(&mut self) {
        self.open = true;
        self.focused = AlertAction::Cancel;
        emit_event("alert.open", &self.title);
    }

    /// Resolve the alert with an explicit action.
    pub fn resolve(&mut self, action: AlertAction) {
        self.open = false;
        let name = match action {
            AlertAction::Cancel => "cancel",
            AlertAction::Confirm => "confirm",
        };
        emit_event("alert.resolve", name);
    }

    /// Keyboard protocol. Esc is deliberately ignored; Tab and the
    /// arrow keys flip focus; Enter resolves with the focused action,
    /// which is returned.
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<AlertAction> {
        if !self.open {
            return None;
        }
        match event.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.focused = match self.focused {
                    AlertAction::Cancel => AlertAction::Confirm,
                    AlertAction::Confirm => AlertAction::Cancel,
                };
                None
            }
            KeyCode::Enter => {
                let action = self.focused;
                self.resolve(action);
                Some(action)
            }
            _ => None,
        }
    }
}

impl Widget for AlertDialog {
    fn render(&self, surface: &mut Surface, area: Rect, theme: &Theme) {
        if !self.open {
            return;
        }
        let buttons_width =
            self.cancel_label.chars().count() + self.confirm_label.chars().count() + 8;
        let width = (self.description.chars().count() + 4)
            .max(self.title.chars().count() + 4)
            .max(buttons_width) as u32;
        let panel = area.centered(width.min(area.width), 7);
        surface.fill_rect(panel, ' ', theme.resolve("bg-surface"));
        surface.draw_box(panel, theme.resolve("border bg-surface"));
        surface.draw_text(
            panel.x + 2,
            panel.y + 1,
            &self.title,
            theme.resolve("text-foreground font-bold bg-surface"),
        );
        surface.draw_text(
            panel.x + 2,
            panel.y + 3,
            &self.description,
            theme.resolve("text-muted bg-surface"),
        );

        let focused = self.focused;
        let button_classes = |action: AlertAction, destructive: bool| {
            ClassList::new()
                .add("text-foreground bg-surface")
                .add_if("text-destructive", destructive)
                .add_if("inverse", focused == action)
                .merge()
        };
        let cancel_style = theme.resolve(&button_classes(AlertAction::Cancel, false));
        let confirm_style = theme.resolve(&button_classes(AlertAction::Confirm, true));
        let confirm_x =
            panel.right() - 2 - self.confirm_label.chars().count() as i32 - 2;
        let cancel_x = confirm_x - 2 - self.cancel_label.chars().count() as i32 - 2;
        surface.draw_text(
            cancel_x,
            panel.bottom() - 2,
            &format!("[{}]", self.cancel_label),
            cancel_style,
        );
        surface.draw_text(
            confirm_x,
            panel.bottom() - 2,
            &format!("[{}]", self.confirm_label),
            confirm_style,
        );
    }
}

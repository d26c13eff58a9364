//! Button: variant and size driven styling over a label.

use crate::class::ClassList;
use crate::render::{Rect, Surface, Widget};
use crate::theme::Theme;
use unicode_width::UnicodeWidthStr;

/// Visual variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Secondary,
    Outline,
    Ghost,
    Link,
    Destructive,
}

impl ButtonVariant {
    /// Class tokens for this variant.
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Default | Self::Primary => "bg-accent text-accent-foreground font-bold",
            Self::Secondary => "bg-surface text-foreground",
            Self::Outline => "border text-foreground",
            Self::Ghost => "text-foreground",
            Self::Link => "text-accent underline",
            Self::Destructive => "bg-destructive text-accent-foreground font-bold",
        }
    }
}

/// Horizontal padding per size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    /// Cells of padding on each side of the label.
    #[must_use]
    pub const fn padding(self) -> u32 {
        match self {
            Self::Sm => 1,
            Self::Md => 2,
            Self::Lg => 3,
        }
    }
}

/// Button widget.
///
/// # Examples
///
/// ```
/// use vulcan_tui::widgets::{Button, ButtonSize, ButtonVariant};
///
/// let button = Button::new("Save")
///     .variant(ButtonVariant::Primary)
///     .size(ButtonSize::Lg);
/// assert_eq!(button.width(), 10);
/// assert!(button.classes().contains("bg-accent"));
/// ```
#[derive(Clone, Debug)]
pub struct Button {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
}

impl Button {
    /// Create a default-variant, medium button.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
        }
    }

    /// Set the variant.
    #[must_use]
    pub const fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size.
    #[must_use]
    pub const fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set the disabled flag.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the button is disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Rendered width: label plus size padding.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.label.width() as u32 + self.size.padding() * 2
    }

    /// Merged class string for the current state.
    #[must_use]
    pub fn classes(&self) -> String {
        ClassList::new()
            .add(self.variant.classes())
            .add_if("disabled", self.disabled)
            .merge()
    }
}

impl Widget for Button {
    fn render(&self, surface: &mut Surface, area: Rect, theme: &Theme) {
        let style = theme.resolve(&self.classes());
        let rect = Rect::new(area.x, area.y, self.width().min(area.width), 1);
        surface.fill_rect(rect, ' ', style);
        surface.draw_text(
            area.x + self.size.padding() as i32,
            area.y,
            &self.label,
            style,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes() {
        assert!(Button::new("x").classes().contains("bg-accent"));
        assert!(
            Button::new("x")
                .variant(ButtonVariant::Destructive)
                .classes()
                .contains("bg-destructive")
        );
        assert!(
            Button::new("x")
                .variant(ButtonVariant::Link)
                .classes()
                .contains("underline")
        );
    }

    #[test]
    fn test_disabled_adds_class() {
        let classes = Button::new("x").disabled(true).classes();
        assert!(classes.contains("disabled"));
    }

    #[test]
    fn test_width_tracks_size() {
        assert_eq!(Button::new("Go").size(ButtonSize::Sm).width(), 4);
        assert_eq!(Button::new("Go").size(ButtonSize::Md).width(), 6);
        assert_eq!(Button::new("Go").size(ButtonSize::Lg).width(), 8);
    }

    #[test]
    fn test_render_pads_label() {
        let button = Button::new("OK").variant(ButtonVariant::Ghost);
        let mut surface = Surface::new(10, 1);
        button.render(&mut surface, Rect::new(0, 0, 10, 1), &Theme::light());
        assert_eq!(surface.to_text(), "  OK\n");
    }
}

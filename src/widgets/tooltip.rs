//! Tooltip: transient label anchored to another element.
//!
//! Visibility is host-driven (hover enter/leave with a configured delay
//! the host clock enforces); the widget computes placement: preferred
//! side first, flipped to the opposite side when it would overflow the
//! viewport, then clamped fully inside.

use crate::render::{Rect, Surface, Widget};
use crate::theme::Theme;
use unicode_width::UnicodeWidthStr;

/// Tooltip side relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Placement {
    /// The opposite side.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Tooltip widget state.
///
/// # Examples
///
/// ```
/// use vulcan_tui::render::Rect;
/// use vulcan_tui::widgets::{Placement, Tooltip};
///
/// let mut tip = Tooltip::new("Saved!").placement(Placement::Top);
/// tip.show();
///
/// // Anchor at the top edge: no room above, flips below.
/// let viewport = Rect::new(0, 0, 40, 12);
/// let anchor = Rect::new(10, 0, 6, 1);
/// let (rect, side) = tip.position(anchor, viewport);
/// assert_eq!(side, Placement::Bottom);
/// assert!(rect.y > anchor.y);
/// ```
#[derive(Clone, Debug)]
pub struct Tooltip {
    text: String,
    placement: Placement,
    delay_ms: u32,
    visible: bool,
}

impl Tooltip {
    /// Create a hidden tooltip.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placement: Placement::default(),
            delay_ms: 200,
            visible: false,
        }
    }

    /// Set the preferred side.
    #[must_use]
    pub const fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the show delay hosts should apply, in milliseconds.
    #[must_use]
    pub const fn delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// The configured show delay.
    #[must_use]
    pub const fn delay(&self) -> u32 {
        self.delay_ms
    }

    /// The tooltip text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the tooltip is visible.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the tooltip (hosts call this after the delay elapses).
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the tooltip.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Rendered size: text width plus a one-cell pad each side.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.text.width() as u32 + 2, 1)
    }

    fn rect_for(&self, side: Placement, anchor: Rect) -> Rect {
        let (w, h) = self.size();
        let center_x = anchor.x + (anchor.width as i32 - w as i32) / 2;
        let center_y = anchor.y + (anchor.height as i32 - h as i32) / 2;
        match side {
            Placement::Top => Rect::new(center_x, anchor.y - h as i32, w, h),
            Placement::Bottom => Rect::new(center_x, anchor.bottom(), w, h),
            Placement::Left => Rect::new(anchor.x - w as i32, center_y, w, h),
            Placement::Right => Rect::new(anchor.right(), center_y, w, h),
        }
    }

    /// Compute the tooltip rectangle for an anchor inside a viewport.
    ///
    /// Tries the preferred side, flips when it overflows, then clamps
    /// the winner fully into the viewport. Returns the rectangle and the
    /// side actually used.
    #[must_use]
    pub fn position(&self, anchor: Rect, viewport: Rect) -> (Rect, Placement) {
        let preferred = self.rect_for(self.placement, anchor);
        let (mut rect, side) = if preferred.fits_within(&viewport) {
            (preferred, self.placement)
        } else {
            let flipped = self.rect_for(self.placement.flipped(), anchor);
            if flipped.fits_within(&viewport) {
                (flipped, self.placement.flipped())
            } else {
                (preferred, self.placement)
            }
        };
        rect.x = rect
            .x
            .clamp(viewport.x, (viewport.right() - rect.width as i32).max(viewport.x));
        rect.y = rect
            .y
            .clamp(viewport.y, (viewport.bottom() - rect.height as i32).max(viewport.y));
        (rect, side)
    }
}

impl Widget for Tooltip {
    fn render(&self, surface: &mut Surface, area: Rect, theme: &Theme) {
        if !self.visible {
            return;
        }
        let style = theme.resolve("inverse text-foreground");
        surface.fill_rect(area, ' ', style);
        surface.draw_text(area.x + 1, area.y, &self.text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferred_side_when_it_fits() {
        let tip = Tooltip::new("hi").placement(Placement::Top);
        let viewport = Rect::new(0, 0, 40, 12);
        let anchor = Rect::new(10, 6, 6, 1);
        let (rect, side) = tip.position(anchor, viewport);
        assert_eq!(side, Placement::Top);
        assert_eq!(rect.y, 5);
    }

    #[test]
    fn test_flip_on_each_axis() {
        let viewport = Rect::new(0, 0, 40, 12);

        let top = Tooltip::new("hi").placement(Placement::Top);
        let (_, side) = top.position(Rect::new(10, 0, 6, 1), viewport);
        assert_eq!(side, Placement::Bottom);

        let bottom = Tooltip::new("hi").placement(Placement::Bottom);
        let (_, side) = bottom.position(Rect::new(10, 11, 6, 1), viewport);
        assert_eq!(side, Placement::Top);

        let left = Tooltip::new("hi").placement(Placement::Left);
        let (_, side) = left.position(Rect::new(0, 6, 6, 1), viewport);
        assert_eq!(side, Placement::Right);

        let right = Tooltip::new("hi").placement(Placement::Right);
        let (_, side) = right.position(Rect::new(34, 6, 6, 1), viewport);
        assert_eq!(side, Placement::Left);
    }

    #[test]
    fn test_clamped_into_viewport() {
        let tip = Tooltip::new("long label").placement(Placement::Top);
        let viewport = Rect::new(0, 0, 20, 12);
        let (rect, _) = tip.position(Rect::new(18, 6, 2, 1), viewport);
        assert!(rect.fits_within(&viewport));
    }

    #[test]
    fn test_visibility_toggles() {
        let mut tip = Tooltip::new("hi");
        assert!(!tip.is_visible());
        tip.show();
        assert!(tip.is_visible());
        tip.hide();
        assert!(!tip.is_visible());
    }

    #[test]
    fn test_render_only_when_visible() {
        let mut tip = Tooltip::new("note");
        let mut surface = Surface::new(10, 2);
        tip.render(&mut surface, Rect::new(0, 0, 6, 1), &Theme::light());
        assert_eq!(surface.to_text().trim(), "");
        tip.show();
        tip.render(&mut surface, Rect::new(0, 0, 6, 1), &Theme::light());
        assert!(surface.to_text().contains("note"));
    }
}

//! Theming and dark mode.
//!
//! A [`Theme`] is a named palette plus a registry mapping class tokens
//! (`"text-muted"`, `"bg-accent"`, `"font-bold"`, ...) to concrete
//! [`Style`]s. Widgets emit class lists; [`Theme::resolve`] merges the
//! matching styles left to right, so later tokens override earlier ones.
//!
//! [`ThemeManager`] owns the light/dark pair and the active
//! [`ThemeMode`]. `System` mode resolves from the terminal environment
//! (the `COLORFGBG` background heuristic); the preference is held for the
//! process lifetime only.
//!
//! # Examples
//!
//! ```
//! use vulcan_tui::theme::{Theme, ThemeManager, ThemeMode};
//!
//! let mut manager = ThemeManager::new(ThemeMode::Light);
//! assert!(!manager.is_dark());
//! manager.toggle();
//! assert!(manager.is_dark());
//!
//! let style = manager.active().resolve("text-muted font-bold");
//! assert!(style.fg.is_some());
//! ```

use crate::color::{Rgba, palette};
use crate::event::{LogLevel, emit_event, emit_log};
use crate::style::Style;
use std::collections::HashMap;
use std::env;

/// Theme preference: explicit light/dark, or follow the environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Collapse `System` into `Light` or `Dark` using the environment.
    #[must_use]
    pub fn resolved(self) -> Self {
        match self {
            Self::System => {
                if system_prefers_dark() {
                    Self::Dark
                } else {
                    Self::Light
                }
            }
            other => other,
        }
    }
}

/// Check whether the hosting terminal advertises a dark background.
///
/// Reads `COLORFGBG` (format `"<fg>;<bg>"`, sometimes with a middle
/// field). Unknown or absent values count as light.
#[must_use]
pub fn system_prefers_dark() -> bool {
    prefers_dark_from(env::var("COLORFGBG").ok().as_deref())
}

/// `COLORFGBG` interpretation, split out for deterministic tests.
///
/// Background palette indices 0-6 and 8 are the dark half of the classic
/// 16-color set.
#[must_use]
pub fn prefers_dark_from(colorfgbg: Option<&str>) -> bool {
    let Some(value) = colorfgbg else { return false };
    let Some(bg) = value.rsplit(';').next() else {
        return false;
    };
    matches!(bg.trim().parse::<u8>(), Ok(idx) if idx <= 6 || idx == 8)
}

/// A named palette and class-token registry.
#[derive(Clone, Debug)]
pub struct Theme {
    name: String,
    background: Rgba,
    surface: Rgba,
    foreground: Rgba,
    muted: Rgba,
    border: Rgba,
    accent: Rgba,
    accent_foreground: Rgba,
    destructive: Rgba,
    ring: Rgba,
    classes: HashMap<String, Style>,
}

impl Theme {
    /// The built-in light theme.
    #[must_use]
    pub fn light() -> Self {
        Self::from_palette(
            "light",
            ThemePalette {
                background: Rgba::WHITE,
                surface: palette::GRAY_50,
                foreground: palette::GRAY_900,
                muted: palette::GRAY_500,
                border: palette::GRAY_200,
                accent: palette::BLUE_600,
                accent_foreground: Rgba::WHITE,
                destructive: palette::RED_600,
                ring: palette::BLUE_300,
            },
        )
    }

    /// The built-in dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self::from_palette(
            "dark",
            ThemePalette {
                background: palette::GRAY_900,
                surface: palette::GRAY_800,
                foreground: palette::GRAY_50,
                muted: palette::GRAY_400,
                border: palette::GRAY_700,
                accent: palette::BLUE_500,
                accent_foreground: Rgba::WHITE,
                destructive: palette::RED_500,
                ring: palette::BLUE_300,
            },
        )
    }

    fn from_palette(name: &str, p: ThemePalette) -> Self {
        let mut theme = Self {
            name: name.to_string(),
            background: p.background,
            surface: p.surface,
            foreground: p.foreground,
            muted: p.muted,
            border: p.border,
            accent: p.accent,
            accent_foreground: p.accent_foreground,
            destructive: p.destructive,
            ring: p.ring,
            classes: HashMap::new(),
        };
        theme.register_default_classes();
        theme
    }

    fn register_default_classes(&mut self) {
        let entries: [(&str, Style); 16] = [
            ("text-foreground", Style::fg(self.foreground)),
            ("text-muted", Style::fg(self.muted)),
            ("text-accent", Style::fg(self.accent)),
            ("text-accent-foreground", Style::fg(self.accent_foreground)),
            ("text-destructive", Style::fg(self.destructive)),
            ("bg-background", Style::bg(self.background)),
            ("bg-surface", Style::bg(self.surface)),
            ("bg-accent", Style::bg(self.accent)),
            ("bg-destructive", Style::bg(self.destructive)),
            ("border", Style::fg(self.border)),
            ("ring", Style::fg(self.ring).with_underline()),
            ("font-bold", Style::bold()),
            ("underline", Style::underline()),
            ("dim", Style::dim()),
            ("inverse", Style::inverse()),
            ("disabled", Style::dim()),
        ];
        for (token, style) in entries {
            self.classes.insert(token.to_string(), style);
        }
    }

    /// Theme name ("light" or "dark" for the built-ins).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Page background color.
    #[must_use]
    pub const fn background(&self) -> Rgba {
        self.background
    }

    /// Raised-surface background color (cards, popovers).
    #[must_use]
    pub const fn surface(&self) -> Rgba {
        self.surface
    }

    /// Primary text color.
    #[must_use]
    pub const fn foreground(&self) -> Rgba {
        self.foreground
    }

    /// Secondary text color.
    #[must_use]
    pub const fn muted(&self) -> Rgba {
        self.muted
    }

    /// Border color.
    #[must_use]
    pub const fn border(&self) -> Rgba {
        self.border
    }

    /// Accent color (selection, primary actions).
    #[must_use]
    pub const fn accent(&self) -> Rgba {
        self.accent
    }

    /// Text color for accent-filled regions.
    #[must_use]
    pub const fn accent_foreground(&self) -> Rgba {
        self.accent_foreground
    }

    /// Destructive-action color.
    #[must_use]
    pub const fn destructive(&self) -> Rgba {
        self.destructive
    }

    /// Focus-ring color.
    #[must_use]
    pub const fn ring(&self) -> Rgba {
        self.ring
    }

    /// Foreground-on-background style for plain text.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::fg(self.foreground).with_bg(self.background)
    }

    /// Look up the style registered for one class token.
    #[must_use]
    pub fn style_for(&self, token: &str) -> Option<Style> {
        self.classes.get(token).copied()
    }

    /// Register (or override) a class token.
    pub fn set_class(&mut self, token: impl Into<String>, style: Style) -> &mut Self {
        self.classes.insert(token.into(), style);
        self
    }

    /// Resolve a class string to a style.
    ///
    /// Tokens merge left to right: later colors win, attributes
    /// accumulate. Unknown tokens are skipped (logged at debug level).
    #[must_use]
    pub fn resolve(&self, classes: &str) -> Style {
        let mut style = Style::NONE;
        for token in classes.split_whitespace() {
            match self.style_for(token) {
                Some(s) => style = style.merge(s),
                None => emit_log(LogLevel::Debug, &format!("unknown class token: {token}")),
            }
        }
        style
    }
}

struct ThemePalette {
    background: Rgba,
    surface: Rgba,
    foreground: Rgba,
    muted: Rgba,
    border: Rgba,
    accent: Rgba,
    accent_foreground: Rgba,
    destructive: Rgba,
    ring: Rgba,
}

/// Owns the light/dark theme pair and the active mode.
#[derive(Clone, Debug)]
pub struct ThemeManager {
    mode: ThemeMode,
    light: Theme,
    dark: Theme,
}

impl ThemeManager {
    /// Create a manager with the built-in themes.
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            light: Theme::light(),
            dark: Theme::dark(),
        }
    }

    /// The configured mode (possibly `System`).
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Whether the resolved mode is dark.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.mode.resolved() == ThemeMode::Dark
    }

    /// The currently active theme.
    #[must_use]
    pub fn active(&self) -> &Theme {
        if self.is_dark() { &self.dark } else { &self.light }
    }

    /// Switch to an explicit mode.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        emit_event("theme.mode", self.active().name());
    }

    /// Flip between light and dark, pinning an explicit mode.
    pub fn toggle(&mut self) {
        let next = if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        self.set_mode(next);
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(ThemeMode::System)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TextAttributes;

    #[test]
    fn test_prefers_dark_from_colorfgbg() {
        assert!(prefers_dark_from(Some("15;0")));
        assert!(prefers_dark_from(Some("0;default;8")));
        assert!(!prefers_dark_from(Some("0;15")));
        assert!(!prefers_dark_from(Some("garbage")));
        assert!(!prefers_dark_from(None));
    }

    #[test]
    fn test_resolve_merges_left_to_right() {
        let theme = Theme::light();
        let style = theme.resolve("text-foreground text-muted font-bold");
        assert_eq!(style.fg, Some(theme.muted()));
        assert!(style.attributes.contains(TextAttributes::BOLD));
    }

    #[test]
    fn test_resolve_skips_unknown_tokens() {
        let theme = Theme::light();
        let style = theme.resolve("no-such-token font-bold");
        assert!(style.fg.is_none());
        assert!(style.attributes.contains(TextAttributes::BOLD));
    }

    #[test]
    fn test_set_class_overrides() {
        let mut theme = Theme::light();
        theme.set_class("text-muted", Style::bold());
        assert_eq!(theme.resolve("text-muted"), Style::bold());
    }

    #[test]
    fn test_toggle_flips_and_pins() {
        let mut manager = ThemeManager::new(ThemeMode::Light);
        manager.toggle();
        assert_eq!(manager.mode(), ThemeMode::Dark);
        assert_eq!(manager.active().name(), "dark");
        manager.toggle();
        assert_eq!(manager.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_light_dark_palettes_differ() {
        assert_ne!(Theme::light().background(), Theme::dark().background());
        assert_ne!(Theme::light().name(), Theme::dark().name());
    }
}

//! RGBA color type backing the theme palettes.
//!
//! Colors are stored as floating-point RGBA components. Widgets never pick
//! colors directly; they go through [`Theme`](crate::theme::Theme) class
//! tokens, which resolve to styles built from these values.
//!
//! # Examples
//!
//! ```
//! use vulcan_tui::Rgba;
//!
//! let accent = Rgba::from_hex("#2563eb").unwrap();
//! let faded = accent.with_alpha(0.5);
//! let on_white = faded.blend_over(Rgba::WHITE);
//! assert!(on_white.luminance() > accent.luminance());
//! ```

use std::fmt;

/// RGBA color with f32 components in range [0.0, 1.0].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a new RGBA color from f32 components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from f32 RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from u8 RGB components.
    #[must_use]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: 1.0,
        }
    }

    /// Create a color from u8 RGBA components.
    #[must_use]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Parse a hex color string (e.g., "#2563eb" or "2563eb").
    ///
    /// Supports 3-char (#RGB), 6-char (#RRGGBB), and 8-char (#RRGGBBAA)
    /// formats. Returns `None` for anything else.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::from_rgb_u8(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::from_rgb_u8(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::from_rgba_u8(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Parse a hex color string, signaling malformed input.
    pub fn try_from_hex(hex: &str) -> crate::Result<Self> {
        Self::from_hex(hex).ok_or_else(|| crate::Error::InvalidColor(hex.to_string()))
    }

    /// Blend this color over another using Porter-Duff "over" compositing.
    ///
    /// `self` is the foreground (on top), `other` is the background.
    #[must_use]
    pub fn blend_over(self, other: Self) -> Self {
        const ALPHA_EPSILON: f32 = 1e-6;

        if self.a >= 1.0 {
            return self;
        }
        if self.a <= 0.0 {
            return other;
        }

        let inv_alpha = 1.0 - self.a;
        let out_a = other.a.mul_add(inv_alpha, self.a);
        if out_a <= ALPHA_EPSILON {
            return Self::TRANSPARENT;
        }

        Self {
            r: (other.r * other.a).mul_add(inv_alpha, self.r * self.a) / out_a,
            g: (other.g * other.a).mul_add(inv_alpha, self.g * self.a) / out_a,
            b: (other.b * other.a).mul_add(inv_alpha, self.b * self.a) / out_a,
            a: out_a,
        }
    }

    /// Return a new color with the specified alpha value.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha,
        }
    }

    /// Convert to u8 RGB tuple, clamping values to [0, 255].
    #[must_use]
    pub fn to_rgb_u8(self) -> (u8, u8, u8) {
        let to_u8 = |value: f32| (value * 255.0).round().clamp(0.0, 255.0) as u8;
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Check if this color is fully transparent.
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    /// Calculate luminance (perceived brightness, ITU-R BT.601).
    #[must_use]
    pub fn luminance(self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Linearly interpolate between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: (other.r - self.r).mul_add(t, self.r),
            g: (other.g - self.g).mul_add(t, self.g),
            b: (other.b - self.b).mul_add(t, self.b),
            a: (other.a - self.a).mul_add(t, self.a),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_rgb_u8();
        if self.a >= 1.0 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = (self.a * 255.0).round().clamp(0.0, 255.0) as u8;
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

/// Neutral and accent swatches shared by the built-in themes.
///
/// Values match the web palette the original component kit styled against.
pub mod palette {
    use super::Rgba;

    pub const GRAY_50: Rgba = Rgba::rgb(0.976, 0.980, 0.984);
    pub const GRAY_100: Rgba = Rgba::rgb(0.953, 0.957, 0.965);
    pub const GRAY_200: Rgba = Rgba::rgb(0.898, 0.906, 0.922);
    pub const GRAY_400: Rgba = Rgba::rgb(0.612, 0.639, 0.686);
    pub const GRAY_500: Rgba = Rgba::rgb(0.420, 0.447, 0.502);
    pub const GRAY_700: Rgba = Rgba::rgb(0.216, 0.255, 0.318);
    pub const GRAY_800: Rgba = Rgba::rgb(0.122, 0.161, 0.216);
    pub const GRAY_900: Rgba = Rgba::rgb(0.067, 0.094, 0.153);

    pub const BLUE_300: Rgba = Rgba::rgb(0.576, 0.773, 0.992);
    pub const BLUE_500: Rgba = Rgba::rgb(0.231, 0.510, 0.965);
    pub const BLUE_600: Rgba = Rgba::rgb(0.145, 0.388, 0.922);

    pub const RED_500: Rgba = Rgba::rgb(0.937, 0.267, 0.267);
    pub const RED_600: Rgba = Rgba::rgb(0.863, 0.149, 0.149);
}

//! Cell surface and geometry for widget rendering.
//!
//! Widgets draw whole frames into a [`Surface`], a width×height grid of
//! `(char, Style)` cells. The surface clips out-of-bounds drawing, keeps
//! wide graphemes two columns wide, dumps to plain text for tests, and
//! emits SGR truecolor sequences for terminal output.

use crate::error::Result;
use crate::style::{Style, TextAttributes};
use crate::theme::Theme;
use std::io::Write;
use unicode_width::UnicodeWidthChar;

/// Marker stored in the cell shadowed by a preceding wide character.
const WIDE_CONTINUATION: char = '\0';

/// An axis-aligned rectangle in cell coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// One past the bottom row.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Check whether a cell position lies inside this rectangle.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check whether this rectangle fits entirely inside `outer`.
    #[must_use]
    pub const fn fits_within(&self, outer: &Self) -> bool {
        self.x >= outer.x
            && self.y >= outer.y
            && self.right() <= outer.right()
            && self.bottom() <= outer.bottom()
    }

    /// Intersect two rectangles; degenerate results have zero size.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Self {
            x,
            y,
            width: right.saturating_sub(x).max(0) as u32,
            height: bottom.saturating_sub(y).max(0) as u32,
        }
    }

    /// A `width`×`height` rectangle centered inside this one.
    #[must_use]
    pub fn centered(&self, width: u32, height: u32) -> Self {
        let w = width.min(self.width);
        let h = height.min(self.height);
        Self {
            x: self.x + ((self.width - w) / 2) as i32,
            y: self.y + ((self.height - h) / 2) as i32,
            width: w,
            height: h,
        }
    }

    /// Shrink the rectangle by `amount` cells on every side.
    #[must_use]
    pub fn inset(&self, amount: u32) -> Self {
        let shrink = (amount * 2).min(self.width).min(self.height);
        let delta = shrink / 2;
        Self {
            x: self.x + delta as i32,
            y: self.y + delta as i32,
            width: self.width - shrink.min(self.width),
            height: self.height - shrink.min(self.height),
        }
    }

    /// Check whether the rectangle has zero area.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct SurfaceCell {
    ch: char,
    style: Style,
}

impl Default for SurfaceCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::NONE,
        }
    }
}

/// A grid of styled character cells.
#[derive(Clone, Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    cells: Vec<SurfaceCell>,
}

impl Surface {
    /// Create a blank surface of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![SurfaceCell::default(); (width * height) as usize],
        }
    }

    /// Surface width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The full surface area as a rectangle at the origin.
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Reset every cell to a space with the given style.
    pub fn clear(&mut self, style: Style) {
        for cell in &mut self.cells {
            *cell = SurfaceCell { ch: ' ', style };
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as u32 * self.width + x as u32) as usize)
    }

    /// Write one character; out-of-bounds writes are clipped.
    ///
    /// A width-2 character also claims the following column. A zero-width
    /// character is dropped.
    pub fn put(&mut self, x: i32, y: i32, ch: char, style: Style) {
        let cell_width = ch.width().unwrap_or(0);
        if cell_width == 0 {
            return;
        }
        let Some(idx) = self.index(x, y) else { return };
        self.cells[idx] = SurfaceCell { ch, style };
        if cell_width == 2 {
            if let Some(next) = self.index(x + 1, y) {
                self.cells[next] = SurfaceCell {
                    ch: WIDE_CONTINUATION,
                    style,
                };
            }
        }
    }

    /// Draw a string starting at `(x, y)`, clipping at the surface edge.
    ///
    /// Returns the number of columns consumed.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, style: Style) -> u32 {
        let mut cursor = x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as i32;
            if w == 0 {
                continue;
            }
            if cursor + w > self.width as i32 {
                break;
            }
            self.put(cursor, y, ch, style);
            cursor += w;
        }
        cursor.saturating_sub(x).max(0) as u32
    }

    /// Fill a rectangle with a character, clipped to the surface.
    pub fn fill_rect(&mut self, rect: Rect, ch: char, style: Style) {
        let clipped = rect.intersect(&self.area());
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.put(x, y, ch, style);
            }
        }
    }

    /// Draw a single-line box border along the edge of `rect`.
    pub fn draw_box(&mut self, rect: Rect, style: Style) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (left, top) = (rect.x, rect.y);
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);
        self.put(left, top, '┌', style);
        self.put(right, top, '┐', style);
        self.put(left, bottom, '└', style);
        self.put(right, bottom, '┘', style);
        for x in (left + 1)..right {
            self.put(x, top, '─', style);
            self.put(x, bottom, '─', style);
        }
        for y in (top + 1)..bottom {
            self.put(left, y, '│', style);
            self.put(right, y, '│', style);
        }
    }

    /// Dump the surface as plain text, one line per row, right-trimmed.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            let mut line = String::new();
            for x in 0..self.width {
                let cell = self.cells[(y * self.width + x) as usize];
                if cell.ch != WIDE_CONTINUATION {
                    line.push(cell.ch);
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }

    /// Emit the surface as ANSI SGR sequences.
    ///
    /// With `color` false, styles are skipped and the plain text dump is
    /// written instead (the `NO_COLOR` path).
    pub fn write_ansi<W: Write>(&self, writer: &mut W, color: bool) -> Result<()> {
        if !color {
            writer.write_all(self.to_text().as_bytes())?;
            return Ok(());
        }
        for y in 0..self.height {
            let mut active: Option<Style> = None;
            for x in 0..self.width {
                let cell = self.cells[(y * self.width + x) as usize];
                if cell.ch == WIDE_CONTINUATION {
                    continue;
                }
                if active != Some(cell.style) {
                    write!(writer, "\x1b[0m")?;
                    write_sgr(writer, cell.style)?;
                    active = Some(cell.style);
                }
                write!(writer, "{}", cell.ch)?;
            }
            writeln!(writer, "\x1b[0m")?;
        }
        Ok(())
    }
}

fn write_sgr<W: Write>(writer: &mut W, style: Style) -> Result<()> {
    let attrs = style.attributes;
    if attrs.contains(TextAttributes::BOLD) {
        write!(writer, "\x1b[1m")?;
    }
    if attrs.contains(TextAttributes::DIM) {
        write!(writer, "\x1b[2m")?;
    }
    if attrs.contains(TextAttributes::ITALIC) {
        write!(writer, "\x1b[3m")?;
    }
    if attrs.contains(TextAttributes::UNDERLINE) {
        write!(writer, "\x1b[4m")?;
    }
    if attrs.contains(TextAttributes::INVERSE) {
        write!(writer, "\x1b[7m")?;
    }
    if attrs.contains(TextAttributes::STRIKETHROUGH) {
        write!(writer, "\x1b[9m")?;
    }
    if let Some(fg) = style.fg {
        let (r, g, b) = fg.to_rgb_u8();
        write!(writer, "\x1b[38;2;{r};{g};{b}m")?;
    }
    if let Some(bg) = style.bg {
        let (r, g, b) = bg.to_rgb_u8();
        write!(writer, "\x1b[48;2;{r};{g};{b}m")?;
    }
    Ok(())
}

/// A widget that can render itself into a region of a surface.
pub trait Widget {
    /// Draw the widget into `area` using the active theme.
    fn render(&self, surface: &mut Surface, area: Rect, theme: &Theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        let i = a.intersect(&b);
        assert_eq!(i, Rect::new(5, 5, 5, 5));

        let disjoint = a.intersect(&Rect::new(20, 20, 2, 2));
        assert!(disjoint.is_empty());
    }

    #[test]
    fn test_rect_centered() {
        let outer = Rect::new(0, 0, 10, 10);
        let inner = outer.centered(4, 2);
        assert_eq!(inner, Rect::new(3, 4, 4, 2));
    }

    #[test]
    fn test_draw_text_clips_at_edge() {
        let mut s = Surface::new(5, 1);
        let consumed = s.draw_text(3, 0, "abcdef", Style::NONE);
        assert_eq!(consumed, 2);
        assert_eq!(s.to_text(), "   ab\n");
    }

    #[test]
    fn test_wide_char_occupies_two_cells() {
        let mut s = Surface::new(4, 1);
        s.draw_text(0, 0, "日x", Style::NONE);
        assert_eq!(s.to_text(), "日x\n");
    }

    #[test]
    fn test_out_of_bounds_put_is_clipped() {
        let mut s = Surface::new(3, 3);
        s.put(-1, 0, 'x', Style::NONE);
        s.put(0, 5, 'x', Style::NONE);
        assert_eq!(s.to_text(), "\n\n\n");
    }

    #[test]
    fn test_draw_box_corners() {
        let mut s = Surface::new(4, 3);
        s.draw_box(Rect::new(0, 0, 4, 3), Style::NONE);
        assert_eq!(s.to_text(), "┌──┐\n│  │\n└──┘\n");
    }

    #[test]
    fn test_write_ansi_no_color_matches_text() {
        let mut s = Surface::new(3, 1);
        s.draw_text(0, 0, "ok", Style::fg(Rgba::WHITE));
        let mut buf = Vec::new();
        s.write_ansi(&mut buf, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), s.to_text());
    }

    #[test]
    fn test_write_ansi_emits_truecolor() {
        let mut s = Surface::new(1, 1);
        s.put(0, 0, 'x', Style::fg(Rgba::from_rgb_u8(1, 2, 3)));
        let mut buf = Vec::new();
        s.write_ansi(&mut buf, true).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("\x1b[38;2;1;2;3m"));
        assert!(out.ends_with("\x1b[0m\n"));
    }
}

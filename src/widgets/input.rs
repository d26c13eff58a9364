//! Single-line text input with grapheme-aware editing.
//!
//! The cursor addresses grapheme clusters, not bytes or chars, so
//! editing over combining sequences and emoji behaves the way a user
//! expects.

use crate::class::ClassList;
use crate::keys::{KeyCode, KeyEvent};
use crate::render::{Rect, Surface, Widget};
use crate::theme::Theme;
use unicode_segmentation::UnicodeSegmentation;

/// Text input widget state.
///
/// # Examples
///
/// ```
/// use vulcan_tui::keys::KeyCode;
/// use vulcan_tui::widgets::TextInput;
///
/// let mut input = TextInput::new("Email");
/// for c in "ab".chars() {
///     input.handle_key(KeyCode::Char(c).into());
/// }
/// input.handle_key(KeyCode::Left.into());
/// input.handle_key(KeyCode::Char('x').into());
/// assert_eq!(input.value(), "axb");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
    placeholder: String,
    mask: Option<char>,
    disabled: bool,
}

impl TextInput {
    /// Create an empty input with a placeholder.
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    /// Mask typed characters (password fields).
    #[must_use]
    pub const fn masked(mut self, mask: char) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Set the disabled flag.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the initial value, cursor at the end.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor = self.grapheme_count();
        self
    }

    /// The raw value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The value as displayed (masked when configured).
    #[must_use]
    pub fn display_value(&self) -> String {
        match self.mask {
            Some(mask) => std::iter::repeat_n(mask, self.grapheme_count()).collect(),
            None => self.value.clone(),
        }
    }

    /// Cursor position in grapheme clusters.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the input is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    /// Byte offset of the grapheme at `index`.
    fn byte_offset(&self, index: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(index)
            .map_or(self.value.len(), |(offset, _)| offset)
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        if self.disabled {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor.
    pub fn insert_str(&mut self, s: &str) {
        if self.disabled {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.value.insert_str(at, s);
        self.cursor += s.graphemes(true).count();
    }

    /// Delete the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if self.disabled || self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Delete the grapheme under the cursor.
    pub fn delete(&mut self) {
        if self.disabled || self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.value.replace_range(start..end, "");
    }

    /// Move the cursor one grapheme left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one grapheme right.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.grapheme_count());
    }

    /// Move the cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor past the last grapheme.
    pub fn move_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    /// Clear the value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Editing protocol; returns whether the event was consumed.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        if self.disabled {
            return false;
        }
        match event.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.move_left();
                true
            }
            KeyCode::Right => {
                self.move_right();
                true
            }
            KeyCode::Home => {
                self.move_home();
                true
            }
            KeyCode::End => {
                self.move_end();
                true
            }
            _ => false,
        }
    }
}

impl Widget for TextInput {
    fn render(&self, surface: &mut Surface, area: Rect, theme: &Theme) {
        let empty = self.is_empty();
        let classes = ClassList::new()
            .add("text-foreground")
            .add_if("text-muted", empty)
            .add_if("disabled", self.disabled)
            .merge();
        let style = theme.resolve(&classes);
        let shown = if empty {
            self.placeholder.clone()
        } else {
            self.display_value()
        };
        surface.draw_text(area.x, area.y, &shown, style);
    }
}

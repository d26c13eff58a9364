//! Accordion: vertically stacked expandable sections.
//!
//! Single mode keeps at most one section open (optionally collapsible to
//! none); multiple mode toggles sections independently.

use crate::class::ClassList;
use crate::event::emit_event;
use crate::render::{Rect, Surface, Widget};
use crate::theme::Theme;

/// Expansion behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccordionKind {
    /// At most one item open at a time.
    #[default]
    Single,
    /// Items toggle independently.
    Multiple,
}

/// One accordion section.
#[derive(Clone, Debug)]
pub struct AccordionItem {
    /// Stable identifier used by toggle/open queries.
    pub value: String,
    /// Header text.
    pub title: String,
    /// Body lines shown while open.
    pub body: Vec<String>,
}

impl AccordionItem {
    /// Create an item.
    #[must_use]
    pub fn new(
        value: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<Vec<String>>,
    ) -> Self {
        Self {
            value: value.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Accordion widget state.
///
/// # Examples
///
/// ```
/// use vulcan_tui::widgets::{Accordion, AccordionItem, AccordionKind};
///
/// let mut acc = Accordion::new(AccordionKind::Single)
///     .collapsible(true)
///     .item(AccordionItem::new("a", "First", vec!["body".into()]))
///     .item(AccordionItem::new("b", "Second", vec![]));
///
/// acc.toggle("a");
/// assert!(acc.is_open("a"));
/// acc.toggle("b"); // single mode: "a" closes
/// assert!(!acc.is_open("a") && acc.is_open("b"));
/// acc.toggle("b"); // collapsible: everything closed
/// assert!(acc.open_values().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Accordion {
    kind: AccordionKind,
    collapsible: bool,
    items: Vec<AccordionItem>,
    open: Vec<String>,
}

impl Accordion {
    /// Create an empty accordion.
    #[must_use]
    pub fn new(kind: AccordionKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Allow single mode to collapse its open item.
    #[must_use]
    pub const fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    /// Append an item.
    #[must_use]
    pub fn item(mut self, item: AccordionItem) -> Self {
        self.items.push(item);
        self
    }

    /// Set the initially open values.
    ///
    /// Single mode keeps only the first.
    #[must_use]
    pub fn default_open<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.open = values.into_iter().map(Into::into).collect();
        if self.kind == AccordionKind::Single {
            self.open.truncate(1);
        }
        self
    }

    /// The items, in order.
    #[must_use]
    pub fn items(&self) -> &[AccordionItem] {
        &self.items
    }

    /// Currently open values, in open order.
    #[must_use]
    pub fn open_values(&self) -> &[String] {
        &self.open
    }

    /// Check whether a value is open.
    #[must_use]
    pub fn is_open(&self, value: &str) -> bool {
        self.open.iter().any(|v| v == value)
    }

    /// Toggle a section by value.
    pub fn toggle(&mut self, value: &str) {
        match self.kind {
            AccordionKind::Single => {
                if self.is_open(value) {
                    if self.collapsible {
                        self.open.clear();
                    }
                } else {
                    self.open.clear();
                    self.open.push(value.to_string());
                }
            }
            AccordionKind::Multiple => {
                if let Some(pos) = self.open.iter().position(|v| v == value) {
                    self.open.remove(pos);
                } else {
                    self.open.push(value.to_string());
                }
            }
        }
        emit_event("accordion.toggle", value);
    }
}

impl Widget for Accordion {
    fn render(&self, surface: &mut Surface, area: Rect, theme: &Theme) {
        let mut y = area.y;
        for item in &self.items {
            if y >= area.bottom() {
                break;
            }
            let open = self.is_open(&item.value);
            let marker = if open { '▾' } else { '▸' };
            let header_classes = ClassList::new()
                .add("text-foreground font-bold")
                .add_if("text-accent", open)
                .merge();
            let header = theme.resolve(&header_classes);
            surface.put(area.x, y, marker, header);
            surface.draw_text(area.x + 2, y, &item.title, header);
            y += 1;
            if open {
                let body_style = theme.resolve("text-muted");
                for line in &item.body {
                    if y >= area.bottom() {
                        break;
                    }
                    surface.draw_text(area.x + 2, y, line, body_style);
                    y += 1;
                }
            }
        }
    }
}

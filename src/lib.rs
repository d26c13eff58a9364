//! `vulcan_tui` - Terminal UI widget toolkit
//!
//! Presentational widgets (accordion, tabs, select, dialogs, tooltip,
//! buttons, text input, form fields, date/time pickers) with a
//! light/dark theme layer, class-token styling, and a calendar
//! month-grid core. Widgets are synchronous state machines that render
//! into a cell [`Surface`]; hosts own the terminal and the event loop.

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Intentional for color math
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow AccordionItem etc
#![allow(clippy::missing_errors_doc)] // Error conditions documented inline
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod calendar;
pub mod class;
pub mod color;
pub mod error;
pub mod event;
pub mod keys;
pub mod render;
pub mod router;
pub mod style;
pub mod theme;
pub mod widgets;

// Re-export core types at crate root
pub use color::Rgba;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use style::{Style, TextAttributes};

// Re-export the calendar core
pub use calendar::{
    Calendar, CalendarDay, Clock, DayFlags, DisabledRule, FixedClock, GridOptions, MonthGrid,
    MonthView, Selection, SystemClock, month_grid, weekday_labels,
};

// Re-export commonly used types
pub use class::{ClassList, merge_classes};
pub use keys::{KeyCode, KeyEvent, KeyModifiers};
pub use render::{Rect, Surface, Widget};
pub use router::{Route, Router};
pub use theme::{Theme, ThemeManager, ThemeMode};

//! Presentational widget state machines.
//!
//! Each widget owns its interaction state (open/closed, highlighted row,
//! cursor position), exposes explicit mutators plus a `handle_key`
//! protocol where keyboard interaction applies, and renders into a
//! [`Surface`](crate::render::Surface) region. Widgets hold no resources
//! and perform no I/O.

pub mod accordion;
pub mod button;
pub mod date_picker;
pub mod dialog;
pub mod form;
pub mod input;
pub mod select;
pub mod tabs;
pub mod time_picker;
pub mod tooltip;

pub use accordion::{Accordion, AccordionItem, AccordionKind};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use date_picker::DatePicker;
pub use dialog::{AlertDialog, AlertAction, Dialog};
pub use form::{Form, FormField};
pub use input::TextInput;
pub use select::{Select, SelectOption};
pub use tabs::{TabOrientation, Tabs};
pub use time_picker::{MinuteStep, Period, Time, TimePicker};
pub use tooltip::{Placement, Tooltip};

//! Form field wiring: labels, required flags, validation, errors.

use crate::class::ClassList;
use crate::render::{Rect, Surface, Widget};
use crate::theme::Theme;
use crate::widgets::input::TextInput;
use std::fmt;
use std::sync::Arc;

type Validator = Arc<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// A labelled input with validation state.
///
/// # Examples
///
/// ```
/// use vulcan_tui::widgets::FormField;
///
/// let mut field = FormField::new("email", "Email")
///     .required()
///     .validator(|v| {
///         if v.contains('@') { Ok(()) } else { Err("must contain @".to_string()) }
///     });
///
/// assert!(!field.validate());
/// field.input_mut().insert_str("user@example.com");
/// assert!(field.validate());
/// assert_eq!(field.error(), None);
/// ```
#[derive(Clone)]
pub struct FormField {
    name: String,
    label: String,
    input: TextInput,
    required: bool,
    hint: Option<String>,
    error: Option<String>,
    validator: Option<Validator>,
}

impl FormField {
    /// Create a field; the label doubles as the input placeholder.
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            name: name.into(),
            input: TextInput::new(label.clone()),
            label,
            required: false,
            hint: None,
            error: None,
            validator: None,
        }
    }

    /// Mark the field required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach hint text shown under the input.
    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Attach a validator run after the required check.
    #[must_use]
    pub fn validator<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(f));
        self
    }

    /// Replace the inner input (to configure masking etc.).
    #[must_use]
    pub fn with_input(mut self, input: TextInput) -> Self {
        self.input = input;
        self
    }

    /// Field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The inner input.
    #[must_use]
    pub const fn input(&self) -> &TextInput {
        &self.input
    }

    /// Mutable access to the inner input.
    pub const fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Current validation error.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Set an error message directly (server-side errors).
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    /// Clear the error.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Run the required check and validator, recording the outcome.
    pub fn validate(&mut self) -> bool {
        if self.required && self.value().trim().is_empty() {
            self.error = Some(format!("{} is required", self.label));
            return false;
        }
        if let Some(validator) = &self.validator {
            if let Err(message) = validator(self.value()) {
                self.error = Some(message);
                return false;
            }
        }
        self.error = None;
        true
    }
}

impl fmt::Debug for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormField")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("required", &self.required)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl Widget for FormField {
    fn render(&self, surface: &mut Surface, area: Rect, theme: &Theme) {
        let label_classes = ClassList::new()
            .add("text-foreground font-bold")
            .add_if("text-destructive", self.error.is_some())
            .merge();
        let mut label = self.label.clone();
        if self.required {
            label.push_str(" *");
        }
        surface.draw_text(area.x, area.y, &label, theme.resolve(&label_classes));
        self.input
            .render(surface, Rect::new(area.x, area.y + 1, area.width, 1), theme);
        if let Some(error) = &self.error {
            surface.draw_text(area.x, area.y + 2, error, theme.resolve("text-destructive"));
        } else if let Some(hint) = &self.hint {
            surface.draw_text(area.x, area.y + 2, hint, theme.resolve("text-muted dim"));
        }
    }
}

/// An ordered set of fields validated together.
#[derive(Clone, Debug, Default)]
pub struct Form {
    fields: Vec<FormField>,
}

impl Form {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field.
    #[must_use]
    pub fn field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    /// The fields, in order.
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Mutable lookup by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Validate every field; true when all pass.
    pub fn validate(&mut self) -> bool {
        let mut ok = true;
        for field in &mut self.fields {
            ok &= field.validate();
        }
        ok
    }

    /// Field names with active errors.
    pub fn error_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.error().is_some())
            .map(FormField::name)
    }
}

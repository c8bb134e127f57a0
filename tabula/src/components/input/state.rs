//! Text field state and props.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;

use crate::components::events::EventResult;
use crate::config::FieldConfig;

/// Unique identifier for a TextField instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

impl FieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__field_{}", self.0)
    }
}

/// Kind of value the field edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
}

/// Visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    Filled,
    #[default]
    Outlined,
    Ghost,
}

/// Field size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Per-render inputs owned by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldProps<'a> {
    pub value: &'a str,
    pub label: Option<&'a str>,
    pub placeholder: &'a str,
    /// Shown below the field unless it is invalid
    pub helper_text: Option<&'a str>,
    /// Shown below the field while it is invalid
    pub error_message: Option<&'a str>,
    pub disabled: bool,
    pub invalid: bool,
    /// Shows a spinner and blocks edits
    pub loading: bool,
    pub input_type: InputType,
    pub variant: Variant,
    pub size: FieldSize,
    /// Offer a clear affordance while there is a value
    pub clearable: bool,
    /// Offer a show/hide toggle and treat the value as a password
    pub password_toggle: bool,
}

impl<'a> FieldProps<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn helper_text(mut self, text: &'a str) -> Self {
        self.helper_text = Some(text);
        self
    }

    /// Mark the field invalid with an error message.
    pub fn error(mut self, message: &'a str) -> Self {
        self.invalid = true;
        self.error_message = Some(message);
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: FieldSize) -> Self {
        self.size = size;
        self
    }

    pub fn clearable(mut self) -> Self {
        self.clearable = true;
        self
    }

    pub fn password_toggle(mut self) -> Self {
        self.password_toggle = true;
        self
    }

    /// The input refuses edits while disabled or loading.
    pub fn is_input_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// The clear affordance is offered for a non-empty, enabled field.
    /// A loading spinner takes its place.
    pub fn shows_clear(&self) -> bool {
        !self.loading && self.clearable && !self.value.is_empty() && !self.disabled
    }

    /// Helper text, unless the field is invalid.
    pub fn visible_helper(&self) -> Option<&'a str> {
        self.helper_text.filter(|_| !self.invalid)
    }

    /// Error message, only while the field is invalid.
    pub fn visible_error(&self) -> Option<&'a str> {
        self.error_message.filter(|_| self.invalid)
    }
}

type ChangeCallback = Box<dyn FnMut(&str)>;

/// A text field with an optional clear affordance and password toggle.
///
/// The value is owned by the host and comes in through [`FieldProps`]. The
/// field itself only remembers whether a toggled password is shown; edits
/// and clears are reported through the `on_change` callback.
///
/// # Example
///
/// ```ignore
/// let mut field = TextField::new().on_change(|value| println!("now {value:?}"));
/// let props = FieldProps::new(&password).password_toggle().clearable();
/// let view = field.render(&props);
/// field.dispatch(&Action::TogglePassword, &props);
/// ```
pub struct TextField {
    /// Unique identifier
    pub(super) id: FieldId,
    /// Password shown in clear text
    show_password: bool,
    on_change: Option<ChangeCallback>,
    pub(super) config: FieldConfig,
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("id", &self.id)
            .field("show_password", &self.show_password)
            .finish_non_exhaustive()
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

impl TextField {
    /// Create a new text field with the password hidden
    pub fn new() -> Self {
        Self {
            id: FieldId::new(),
            show_password: false,
            on_change: None,
            config: FieldConfig::default(),
        }
    }

    /// Set the callback fired with the new value on edits and clears
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Set the display config
    pub fn config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the unique ID for this field
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Check if a toggled password is currently shown
    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    /// The type the input is rendered with.
    ///
    /// With `password_toggle` the field is a password input that the
    /// toggle switches to plain text; `input_type` is ignored.
    pub fn effective_type(&self, props: &FieldProps<'_>) -> InputType {
        if props.password_toggle {
            if self.show_password {
                InputType::Text
            } else {
                InputType::Password
            }
        } else {
            props.input_type
        }
    }

    // -------------------------------------------------------------------------
    // Handlers
    // -------------------------------------------------------------------------

    /// Flip password visibility.
    pub fn toggle_password(&mut self) -> EventResult {
        self.show_password = !self.show_password;
        debug!("{}: password visible = {}", self.id, self.show_password);
        EventResult::Consumed
    }

    /// Report an edit made in the rendering engine.
    pub fn on_input(&mut self, value: &str, props: &FieldProps<'_>) -> EventResult {
        if props.is_input_disabled() {
            return EventResult::Ignored;
        }
        self.notify(value);
        EventResult::Consumed
    }

    /// Clear the value, if the clear affordance is offered.
    pub fn on_clear(&mut self, props: &FieldProps<'_>) -> EventResult {
        if !props.shows_clear() {
            return EventResult::Ignored;
        }
        debug!("{}: cleared", self.id);
        self.notify("");
        EventResult::Consumed
    }

    fn notify(&mut self, value: &str) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
    }
}

//! Event handling for the TextField component.

use log::trace;

use crate::components::events::{Action, EventResult};

use super::state::{FieldProps, TextField};

impl TextField {
    /// Route an action taken from this field's render description.
    pub fn dispatch(&mut self, action: &Action, props: &FieldProps<'_>) -> EventResult {
        trace!("{}: dispatch {}", self.id, action);
        match action {
            Action::Clear => self.on_clear(props),
            Action::TogglePassword if props.password_toggle => self.toggle_password(),
            _ => EventResult::Ignored,
        }
    }
}

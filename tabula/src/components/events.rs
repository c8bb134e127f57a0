//! Component event handling types.
//!
//! Render descriptions carry [`Action`]s instead of closures. When the
//! rendering engine sees a click on a node, it hands the node's action back
//! to the owning component's `dispatch`, which runs the matching handler.

use std::fmt;

use super::table::Identity;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// A click-handler reference embedded in a render description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Header click on the column with this key
    Sort { column: String },
    /// Row click on the row with this identity
    ToggleRow(Identity),
    /// Clear affordance of a text field
    Clear,
    /// Password visibility toggle of a text field
    TogglePassword,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Sort { column } => write!(f, "sort:{}", column),
            Action::ToggleRow(id) => write!(f, "toggle_row:{}", id),
            Action::Clear => f.write_str("clear"),
            Action::TogglePassword => f.write_str("toggle_password"),
        }
    }
}

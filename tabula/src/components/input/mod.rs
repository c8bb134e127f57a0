//! Text field component - a value wrapper with clear and password toggle.

mod events;
mod render;
mod state;

pub use render::{Affordance, FieldMessage, FieldView};
pub use state::{FieldId, FieldProps, FieldSize, InputType, TextField, Variant};

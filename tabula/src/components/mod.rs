//! UI components with self-managed state.
//!
//! Each component lives in its own module with:
//! - `state.rs` - the component state type and its handlers
//! - `render.rs` - the render description
//! - `events.rs` - action dispatch
//! - `mod.rs` - public exports

pub mod events;
pub mod input;
pub mod selection;
pub mod table;

pub use events::{Action, EventResult};
pub use input::{FieldId, FieldProps, FieldSize, FieldView, InputType, TextField, Variant};
pub use selection::{Selection, SelectionMode};
pub use table::{Column, DataTable, Identity, SortDirection, SortState, TableProps, TableView};

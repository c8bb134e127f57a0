//! Prelude module for convenient imports.
//!
//! ```ignore
//! use tabula::prelude::*;
//! ```

pub use crate::components::input::{FieldProps, FieldSize, FieldView, InputType, TextField, Variant};
pub use crate::components::table::{
    Column, DataTable, Identity, RenderMode, SortDirection, SortState, TableProps, TableView,
};
pub use crate::components::{Action, EventResult, Selection, SelectionMode};
pub use crate::config::{Config, FieldConfig, TableConfig};
pub use crate::error::{ConfigError, SchemaError};
pub use crate::node::Node;
pub use crate::value::{Record, Value};

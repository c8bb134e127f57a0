//! Table component - a data table with sortable columns and row selection.
//!
//! The Table component provides:
//! - Click-to-sort on sortable columns (ascending, then descending)
//! - Row selection (single or multi-select) with a change callback
//! - A loading / empty / populated body
//!
//! # Example
//!
//! ```ignore
//! use tabula::prelude::*;
//!
//! struct User {
//!     id: i64,
//!     name: String,
//! }
//!
//! impl Record for User {
//!     fn field(&self, name: &str) -> Value {
//!         match name {
//!             "id" => self.id.into(),
//!             "name" => self.name.as_str().into(),
//!             _ => Value::Null,
//!         }
//!     }
//! }
//!
//! let columns = vec![
//!     Column::new("id", "ID").sortable(),
//!     Column::new("name", "Name").sortable(),
//! ];
//! let mut table = DataTable::new(|u: &User| u.id.into());
//! let view = table.render(&TableProps::new(&users, &columns));
//! ```

mod events;
mod item;
mod render;
mod sort;
mod state;

pub use item::{Column, Identity};
pub use render::{
    BodyRow, HeaderCell, RenderMode, SelectorKind, TableBody, TableView, render_mode,
};
pub use sort::{SortDirection, SortState, compare_rows, next_sort, sort_rows};
pub use state::{DataTable, TableId, TableProps};

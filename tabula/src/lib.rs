//! Stateful display components that produce abstract render descriptions.
//!
//! The main component is [`DataTable`](components::table::DataTable): a table
//! over host-owned rows with click-to-sort headers, single or multiple row
//! selection and a loading / empty / populated body. A smaller
//! [`TextField`](components::input::TextField) sits next to it.
//!
//! Components never draw. Each call to `render` returns a view describing
//! what to show; clickable parts carry an [`Action`](components::Action) that
//! the rendering engine hands back to the component's `dispatch`.

pub mod components;
pub mod config;
pub mod error;
pub mod node;
pub mod prelude;
pub mod style;
pub mod text;
pub mod value;

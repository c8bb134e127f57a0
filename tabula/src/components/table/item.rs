//! Row identity and column descriptors for table display.

use std::fmt;

use serde::Deserialize;

use crate::value::Value;

/// The value that identifies a row within its collection.
///
/// Used to key rendered rows and to track selection across re-sorts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identity {
    Int(i64),
    Str(String),
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Int(i) => write!(f, "{}", i),
            Identity::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identity {
    fn from(i: i64) -> Self {
        Identity::Int(i)
    }
}

impl From<i32> for Identity {
    fn from(i: i32) -> Self {
        Identity::Int(i.into())
    }
}

impl From<u32> for Identity {
    fn from(i: u32) -> Self {
        Identity::Int(i.into())
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Identity::Str(s.to_string())
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Identity::Str(s)
    }
}

impl From<Value> for Identity {
    /// Integers and strings map directly; any other value is keyed by its
    /// display string.
    fn from(value: Value) -> Self {
        match value {
            Value::Int(i) => Identity::Int(i),
            Value::Str(s) => Identity::Str(s),
            other => Identity::Str(other.to_string()),
        }
    }
}

/// Column configuration.
///
/// The column sequence handed to the table is its display order. `key`
/// identifies the column, `data_index` names the row field shown in it and
/// used for sorting.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("id", "ID").sortable(),
///     Column::new("name", "Name").sortable(),
///     Column::new("email", "Email"),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Unique column key
    pub key: String,
    /// Header label
    pub title: String,
    /// Row field displayed in this column
    pub data_index: String,
    /// Whether header clicks sort by this column
    #[serde(default)]
    pub sortable: bool,
}

impl Column {
    /// Create a column whose field has the same name as its key.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            data_index: key.clone(),
            key,
            title: title.into(),
            sortable: false,
        }
    }

    /// Read a different row field than the column key.
    pub fn data_index(mut self, field: impl Into<String>) -> Self {
        self.data_index = field.into();
        self
    }

    /// Make the column sortable.
    ///
    /// Sortable columns show a direction indicator while active and
    /// respond to header clicks.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

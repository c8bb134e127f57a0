//! Error types.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::components::table::{Column, Identity};

/// A row or column collection that breaks the table's identity contract.
///
/// The table never returns these on its own; they come from the opt-in
/// [`validate`] helper.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two rows share an identity.
    #[error("Duplicate row identity '{identity}' at rows {first} and {second}")]
    DuplicateIdentity {
        /// The shared identity.
        identity: Identity,
        /// Index of the first row carrying it.
        first: usize,
        /// Index of the second row carrying it.
        second: usize,
    },

    /// Two columns share a key.
    #[error("Duplicate column key '{0}'")]
    DuplicateColumnKey(String),
}

/// Errors that can occur when loading a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Check that row identities and column keys are unique.
///
/// Reports the first problem found, columns first.
pub fn validate<T, F>(rows: &[T], columns: &[Column], identity: F) -> Result<(), SchemaError>
where
    F: Fn(&T) -> Identity,
{
    let mut keys = HashSet::with_capacity(columns.len());
    for column in columns {
        if !keys.insert(column.key.as_str()) {
            return Err(SchemaError::DuplicateColumnKey(column.key.clone()));
        }
    }

    let mut seen: HashMap<Identity, usize> = HashMap::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let id = identity(row);
        if let Some(&first) = seen.get(&id) {
            return Err(SchemaError::DuplicateIdentity {
                identity: id,
                first,
                second: index,
            });
        }
        seen.insert(id, index);
    }

    Ok(())
}

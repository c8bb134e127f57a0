//! Selection state for the table component.
//!
//! Selection tracks row identities, not positions, so it survives re-sorting
//! and row-collection changes. Identities that are no longer present in the
//! current rows stay selected but resolve to nothing.

use std::collections::HashSet;

use super::table::Identity;

/// Selection mode for components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// Clicking a row replaces the selection with that row
    Single,
    /// Clicking a row toggles its membership
    #[default]
    Multiple,
}

/// Identity-based selection snapshot.
///
/// Updates return a new snapshot, so the previous one can be kept and
/// compared with [`Selection::diff`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: HashSet<Identity>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an identity is selected.
    pub fn contains(&self, id: &Identity) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected identities.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate over selected identities (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Identity> {
        self.selected.iter()
    }

    /// Get all selected identities (sorted for deterministic ordering).
    pub fn identities(&self) -> Vec<Identity> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Apply a row click and return the resulting selection.
    ///
    /// - `Multiple`: removes `id` if present, adds it otherwise.
    /// - `Single`: the result is exactly `{id}`, whatever was selected before.
    pub fn toggled(&self, id: &Identity, mode: SelectionMode) -> Selection {
        let mut next = self.clone();
        match mode {
            SelectionMode::Single => {
                next.selected.clear();
                next.selected.insert(id.clone());
            }
            SelectionMode::Multiple => {
                if !next.selected.remove(id) {
                    next.selected.insert(id.clone());
                }
            }
        }
        next
    }

    /// Compare with a later snapshot.
    /// Returns (added, removed) identities, each sorted.
    pub fn diff(&self, next: &Selection) -> (Vec<Identity>, Vec<Identity>) {
        let mut added: Vec<_> = next.selected.difference(&self.selected).cloned().collect();
        let mut removed: Vec<_> = self.selected.difference(&next.selected).cloned().collect();
        added.sort();
        removed.sort();
        (added, removed)
    }

    /// Resolve the selection against a row collection.
    ///
    /// Keeps `rows` order. Selected identities missing from `rows` are skipped.
    pub fn selected_rows<'a, T, F>(&self, rows: &'a [T], identity: F) -> Vec<&'a T>
    where
        F: Fn(&T) -> Identity,
    {
        if self.selected.is_empty() {
            return Vec::new();
        }
        rows.iter()
            .filter(|row| self.selected.contains(&identity(*row)))
            .collect()
    }
}

impl FromIterator<Identity> for Selection {
    fn from_iter<I: IntoIterator<Item = Identity>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

//! Sort state and the sort engine.

use std::cmp::Ordering;

use crate::value::Record;

use super::item::Column;

/// Sort direction of the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// The active sort: a row field and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// Row field compared by the sort (a column's `data_index`)
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    /// Ascending sort on `key`.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    /// Descending sort on `key`.
    pub fn descending(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    /// Whether this sort is driven by `column`.
    pub fn is_on(&self, column: &Column) -> bool {
        self.key == column.data_index
    }
}

/// Compare two rows under a sort state.
///
/// `None` treats every pair as equal. Field values compare through
/// [`Value::total_compare`](crate::value::Value::total_compare): numbers
/// numerically, strings by code point. Code point order differs from UTF-16
/// code unit order only between characters above U+FFFF (most emoji) and
/// those in U+E000..=U+FFFF, which UTF-16 places after them.
pub fn compare_rows<T: Record>(a: &T, b: &T, state: Option<&SortState>) -> Ordering {
    let Some(state) = state else {
        return Ordering::Equal;
    };
    let ordering = a.field(&state.key).total_compare(&b.field(&state.key));
    match state.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Derive the display order of `rows`.
///
/// Returns references into `rows`; the caller's collection is never
/// reordered. Rows that compare equal have no guaranteed relative order.
pub fn sort_rows<'a, T: Record>(rows: &'a [T], state: Option<&SortState>) -> Vec<&'a T> {
    let mut view: Vec<&T> = rows.iter().collect();
    if state.is_some() {
        view.sort_by(|a, b| compare_rows(*a, *b, state));
    }
    view
}

/// The sort state after a header click on `column`.
///
/// Non-sortable columns leave the state unchanged. Clicking the active
/// column flips its direction; any other sortable column starts ascending.
pub fn next_sort(current: Option<&SortState>, column: &Column) -> Option<SortState> {
    if !column.sortable {
        return current.cloned();
    }
    match current {
        Some(state) if state.is_on(column) => Some(SortState::new(
            column.data_index.clone(),
            state.direction.flip(),
        )),
        _ => Some(SortState::ascending(column.data_index.clone())),
    }
}

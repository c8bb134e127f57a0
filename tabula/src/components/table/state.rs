//! Table component state.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;

use crate::components::events::EventResult;
use crate::components::selection::{Selection, SelectionMode};
use crate::config::TableConfig;
use crate::error::{self, SchemaError};
use crate::value::Record;

use super::item::{Column, Identity};
use super::render::{RenderMode, render_mode};
use super::sort::{SortState, next_sort, sort_rows};

/// Unique identifier for a DataTable instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

type IdentityFn<T> = Box<dyn Fn(&T) -> Identity>;
type SelectionCallback<T> = Box<dyn FnMut(&[&T])>;

/// Per-render inputs owned by the host.
///
/// Rows and columns are borrowed for one call only; the table keeps no
/// reference to them between calls.
#[derive(Debug)]
pub struct TableProps<'a, T> {
    /// Rows in host order
    pub rows: &'a [T],
    /// Columns in display order
    pub columns: &'a [Column],
    /// Show the loading status row instead of data
    pub loading: bool,
    /// Show selectors and accept row clicks
    pub selectable: bool,
}

impl<'a, T> TableProps<'a, T> {
    pub fn new(rows: &'a [T], columns: &'a [Column]) -> Self {
        Self {
            rows,
            columns,
            loading: false,
            selectable: false,
        }
    }

    /// Set the loading flag.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the selectable flag.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }
}

impl<T> Clone for TableProps<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TableProps<'_, T> {}

/// A sortable, selectable table of host-owned rows.
///
/// `DataTable<T>` owns exactly two pieces of state:
/// - the active sort (`None` until a sortable header is clicked)
/// - the set of selected row identities
///
/// Rows, columns and the loading/selectable flags are passed in on every
/// call through [`TableProps`]. All handlers run synchronously; the
/// selection callback fires before the handler returns.
///
/// # Example
///
/// ```ignore
/// let mut table = DataTable::new(|u: &User| u.id.into())
///     .with_selection(SelectionMode::Multiple)
///     .on_selection_change(|rows: &[&User]| println!("{} selected", rows.len()));
///
/// let props = TableProps::new(&users, &columns).selectable(true);
/// let view = table.render(&props);
/// // engine reports a click on a header or row:
/// table.dispatch(&action, &props);
/// ```
pub struct DataTable<T> {
    /// Unique identifier.
    pub(super) id: TableId,
    /// Active sort.
    sort: Option<SortState>,
    /// Selected row identities.
    selection: Selection,
    /// Fixed at construction.
    mode: SelectionMode,
    identity: IdentityFn<T>,
    on_selection_change: Option<SelectionCallback<T>>,
    pub(super) config: TableConfig,
}

impl<T> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("id", &self.id)
            .field("sort", &self.sort)
            .field("selection", &self.selection)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl<T: Record> DataTable<T> {
    /// Create a table whose rows are identified by `identity`.
    pub fn new<F>(identity: F) -> Self
    where
        F: Fn(&T) -> Identity + 'static,
    {
        Self {
            id: TableId::new(),
            sort: None,
            selection: Selection::new(),
            mode: SelectionMode::default(),
            identity: Box::new(identity),
            on_selection_change: None,
            config: TableConfig::default(),
        }
    }

    /// Create a table whose rows are identified by the named field.
    pub fn by_field(field: impl Into<String>) -> Self
    where
        T: 'static,
    {
        let field = field.into();
        Self::new(move |row: &T| Identity::from(row.field(&field)))
    }

    /// Set the selection mode. Only available while building.
    pub fn with_selection(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the callback fired with the selected rows after every row click.
    pub fn on_selection_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&[&T]) + 'static,
    {
        self.on_selection_change = Some(Box::new(callback));
        self
    }

    /// Set the display config.
    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the unique ID for this table
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the active sort
    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Get the current selection snapshot
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Get the selection mode
    pub fn selection_mode(&self) -> SelectionMode {
        self.mode
    }

    /// Identity of a row
    pub fn identity_of(&self, row: &T) -> Identity {
        (self.identity)(row)
    }

    /// Check if a row is selected
    pub fn is_selected(&self, row: &T) -> bool {
        self.selection.contains(&self.identity_of(row))
    }

    /// Rows in display order under the active sort
    pub fn sorted_rows<'a>(&self, rows: &'a [T]) -> Vec<&'a T> {
        sort_rows(rows, self.sort.as_ref())
    }

    /// Selected rows, in `rows` order
    pub fn selected_rows<'a>(&self, rows: &'a [T]) -> Vec<&'a T> {
        self.selection.selected_rows(rows, |row| self.identity_of(row))
    }

    /// Body mode for the given props
    pub fn render_mode(&self, props: &TableProps<'_, T>) -> RenderMode {
        render_mode(props.loading, props.rows.len())
    }

    /// Check rows and columns against the identity contract
    pub fn validate(&self, props: &TableProps<'_, T>) -> Result<(), SchemaError> {
        error::validate(props.rows, props.columns, |row| self.identity_of(row))
    }

    // -------------------------------------------------------------------------
    // Handlers
    // -------------------------------------------------------------------------

    /// Handle a header click.
    ///
    /// Sortable columns toggle or start a sort; other columns are ignored.
    pub fn on_header_click(&mut self, column: &Column) -> EventResult {
        if !column.sortable {
            return EventResult::Ignored;
        }
        self.sort = next_sort(self.sort.as_ref(), column);
        debug!("{}: sort {:?}", self.id, self.sort);
        EventResult::Consumed
    }

    /// Handle a row click.
    ///
    /// Updates the selection according to the selection mode, then notifies
    /// the host with the selected rows resolved against `rows`.
    pub fn on_row_click(&mut self, id: &Identity, rows: &[T]) -> EventResult {
        let next = self.selection.toggled(id, self.mode);
        let (added, removed) = self.selection.diff(&next);
        debug!(
            "{}: selection +{:?} -{:?} ({} selected)",
            self.id,
            added,
            removed,
            next.len()
        );
        self.selection = next;

        let selected = self.selected_rows(rows);
        if let Some(callback) = self.on_selection_change.as_mut() {
            callback(&selected);
        }
        EventResult::Consumed
    }
}

//! Event handling for the Table component.

use log::trace;

use crate::components::events::{Action, EventResult};
use crate::value::Record;

use super::state::{DataTable, TableProps};

impl<T: Record> DataTable<T> {
    /// Route an action taken from this table's render description.
    ///
    /// Row clicks only count while `props.selectable` is set. Actions that
    /// belong to other components, or name a column that is no longer in
    /// `props.columns`, are ignored.
    pub fn dispatch(&mut self, action: &Action, props: &TableProps<'_, T>) -> EventResult {
        trace!("{}: dispatch {}", self.id, action);
        match action {
            Action::Sort { column } => match props.columns.iter().find(|c| &c.key == column) {
                Some(column) => self.on_header_click(column),
                None => EventResult::Ignored,
            },
            Action::ToggleRow(id) if props.selectable => self.on_row_click(id, props.rows),
            _ => EventResult::Ignored,
        }
    }
}

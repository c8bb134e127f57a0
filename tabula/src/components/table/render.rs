//! Table rendering: render-mode selection and the table view description.

use log::{trace, warn};

use crate::components::events::Action;
use crate::components::selection::SelectionMode;
use crate::config::TableConfig;
use crate::error;
use crate::node::{Align, Layout, Node};
use crate::style::{Color, Style};
use crate::value::Record;

use super::item::Identity;
use super::sort::{SortDirection, sort_rows};
use super::state::{DataTable, TableProps};

/// What the table body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Data is being fetched
    Loading,
    /// No rows to show
    Empty,
    /// One body row per data row
    Populated,
}

/// Choose the body mode.
///
/// Loading wins over everything; otherwise an empty collection is Empty.
pub fn render_mode(loading: bool, row_count: usize) -> RenderMode {
    if loading {
        RenderMode::Loading
    } else if row_count == 0 {
        RenderMode::Empty
    } else {
        RenderMode::Populated
    }
}

/// Selection control shown at the start of a selectable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    Checkbox,
    Radio,
}

impl From<SelectionMode> for SelectorKind {
    fn from(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => SelectorKind::Radio,
            SelectionMode::Multiple => SelectorKind::Checkbox,
        }
    }
}

/// A header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column key
    pub key: String,
    /// Column title
    pub label: String,
    /// Direction of the active sort, only on the active sortable column
    pub indicator: Option<SortDirection>,
    /// Present on sortable columns
    pub on_click: Option<Action>,
}

/// A body row in populated mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
    pub identity: Identity,
    pub selected: bool,
    /// Present when the table is selectable
    pub selector: Option<SelectorKind>,
    /// Present when the table is selectable
    pub on_click: Option<Action>,
    /// Cell text, one per column in column order
    pub cells: Vec<String>,
}

/// The table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// A single full-width row for Loading and Empty modes
    Status {
        mode: RenderMode,
        message: String,
        /// Number of grid columns the row spans
        span: usize,
    },
    /// Populated mode, in display order
    Rows(Vec<BodyRow>),
}

/// Render description of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub id: String,
    /// Whether a leading selector column is present
    pub selectable: bool,
    pub header: Vec<HeaderCell>,
    pub body: TableBody,
    config: TableConfig,
}

impl TableView {
    /// Body mode of this view.
    pub fn mode(&self) -> RenderMode {
        match &self.body {
            TableBody::Status { mode, .. } => *mode,
            TableBody::Rows(_) => RenderMode::Populated,
        }
    }

    /// Body rows, empty unless populated.
    pub fn rows(&self) -> &[BodyRow] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::Status { .. } => &[],
        }
    }

    /// Header label with the active sort indicator appended.
    pub fn header_text(&self, cell: &HeaderCell) -> String {
        match cell.indicator {
            Some(SortDirection::Ascending) => {
                format!("{}{}", cell.label, self.config.ascending_indicator)
            }
            Some(SortDirection::Descending) => {
                format!("{}{}", cell.label, self.config.descending_indicator)
            }
            None => cell.label.clone(),
        }
    }

    /// Convert to a node tree for the rendering engine.
    pub fn into_node(self) -> Node {
        let header_style = Style::new()
            .bg(Color::named("table.header_bg"))
            .bold();

        let mut header_cells = Vec::with_capacity(self.header.len() + 1);
        if self.selectable {
            header_cells.push(Node::text(""));
        }
        for cell in &self.header {
            let label = Node::text_styled(self.header_text(cell), header_style.clone());
            header_cells.push(match &cell.on_click {
                Some(action) => button(label, action.clone(), format!("{}-header-{}", self.id, cell.key)),
                None => label,
            });
        }
        let header = Node::row_styled(header_cells, header_style, Layout::default());

        let body = match &self.body {
            TableBody::Status { mode, message, span } => {
                let (content, style) = match mode {
                    RenderMode::Loading => (
                        format!("{} {}", self.config.spinner, message),
                        Style::new().fg(Color::named("text.muted")),
                    ),
                    _ => (message.clone(), Style::new().fg(Color::named("text.muted")).dim()),
                };
                let layout = Layout::spanning(grid_span(*span))
                    .align(Align::Center)
                    .padding(0, 1);
                vec![Node::row_styled(
                    vec![Node::text(content)],
                    style,
                    layout,
                )]
            }
            TableBody::Rows(rows) => rows.iter().map(|row| self.row_node(row)).collect(),
        };

        let mut children = Vec::with_capacity(body.len() + 1);
        children.push(header);
        children.extend(body);
        Node::column_styled(
            children,
            Style::new().border(Color::named("table.border")),
            Layout::spanning(grid_span(self.header.len() + usize::from(self.selectable))),
        )
    }

    fn row_node(&self, row: &BodyRow) -> Node {
        let mut cells = Vec::with_capacity(row.cells.len() + 1);
        if let Some(kind) = row.selector {
            let glyph = match (kind, row.selected) {
                (SelectorKind::Checkbox, true) => &self.config.checkbox_on,
                (SelectorKind::Checkbox, false) => &self.config.checkbox_off,
                (SelectorKind::Radio, true) => &self.config.radio_on,
                (SelectorKind::Radio, false) => &self.config.radio_off,
            };
            cells.push(Node::text(glyph.clone()));
        }
        cells.extend(row.cells.iter().map(Node::text));

        let style = if row.selected {
            Style::new()
                .bg(Color::named("table.row_selected"))
                .fg(Color::named("text.inverted"))
        } else {
            Style::new()
        };
        let content = Node::row_styled(cells, style, Layout::default());

        match &row.on_click {
            Some(action) => button(content, action.clone(), format!("{}-row-{}", self.id, row.identity)),
            None => content,
        }
    }
}

/// Column span for a layout, saturating at the widest span a layout holds.
fn grid_span(columns: usize) -> u16 {
    u16::try_from(columns).unwrap_or(u16::MAX)
}

fn button(child: Node, action: Action, id: String) -> Node {
    Node::Button {
        child: Box::new(child),
        on_click: Some(action),
        id: Some(id),
        style: Style::new(),
        layout: Layout::default(),
    }
}

impl<T: Record> DataTable<T> {
    /// Build the render description for the current state and props.
    pub fn render(&self, props: &TableProps<'_, T>) -> TableView {
        if self.config.warn_on_invalid
            && let Err(e) = error::validate(props.rows, props.columns, |row| self.identity_of(row))
        {
            warn!("{}: {}", self.id, e);
        }

        let sort = self.sort_state();
        let header = props
            .columns
            .iter()
            .map(|col| HeaderCell {
                key: col.key.clone(),
                label: col.title.clone(),
                indicator: sort
                    .filter(|s| col.sortable && s.is_on(col))
                    .map(|s| s.direction),
                on_click: col.sortable.then(|| Action::Sort {
                    column: col.key.clone(),
                }),
            })
            .collect();

        let span = props.columns.len() + usize::from(props.selectable);
        let mode = render_mode(props.loading, props.rows.len());
        trace!("{}: render mode {:?} ({} rows)", self.id, mode, props.rows.len());

        let body = match mode {
            RenderMode::Loading => TableBody::Status {
                mode,
                message: self.config.loading_label.clone(),
                span,
            },
            RenderMode::Empty => TableBody::Status {
                mode,
                message: self.config.empty_label.clone(),
                span,
            },
            RenderMode::Populated => {
                let selector = props.selectable.then(|| SelectorKind::from(self.selection_mode()));
                let rows = sort_rows(props.rows, sort)
                    .into_iter()
                    .map(|row| {
                        let identity = self.identity_of(row);
                        BodyRow {
                            selected: self.selection().contains(&identity),
                            selector,
                            on_click: props
                                .selectable
                                .then(|| Action::ToggleRow(identity.clone())),
                            cells: props
                                .columns
                                .iter()
                                .map(|col| row.field(&col.data_index).to_string())
                                .collect(),
                            identity,
                        }
                    })
                    .collect();
                TableBody::Rows(rows)
            }
        };

        TableView {
            id: self.id.to_string(),
            selectable: props.selectable,
            header,
            body,
            config: self.config.clone(),
        }
    }
}

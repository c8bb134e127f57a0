//! Tests for the DataTable component.

use std::cell::RefCell;
use std::rc::Rc;

use simplelog::{Config as LogConfig, LevelFilter, TestLogger};
use tabula::components::table::{SelectorKind, TableBody};
use tabula::prelude::*;
use tabula::text::render_lines;

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: i64,
    name: String,
    email: String,
}

impl Record for User {
    fn field(&self, name: &str) -> Value {
        match name {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            _ => Value::Null,
        }
    }
}

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, LogConfig::default());
}

fn user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
    }
}

fn sample_users() -> Vec<User> {
    vec![user(1, "Talish"), user(2, "Ansh")]
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").sortable(),
        Column::new("name", "Name").sortable(),
        Column::new("email", "Email"),
    ]
}

fn table() -> DataTable<User> {
    DataTable::new(|u: &User| Identity::from(u.id))
}

fn ids(rows: &[&User]) -> Vec<i64> {
    rows.iter().map(|u| u.id).collect()
}

fn view_ids(view: &TableView) -> Vec<Identity> {
    view.rows().iter().map(|r| r.identity.clone()).collect()
}

type Calls = Rc<RefCell<Vec<Vec<i64>>>>;

fn recording_table(mode: SelectionMode) -> (DataTable<User>, Calls) {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    let table = table()
        .with_selection(mode)
        .on_selection_change(move |rows: &[&User]| {
            sink.borrow_mut().push(rows.iter().map(|u| u.id).collect());
        });
    (table, calls)
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_initial_sort_is_none_and_order_preserved() {
    let rows = vec![user(2, "B"), user(1, "A")];
    let table = table();

    assert!(table.sort_state().is_none());
    assert_eq!(ids(&table.sorted_rows(&rows)), vec![2, 1]);
}

#[test]
fn test_end_to_end_sort_scenario() {
    init_logger();
    let rows = vec![user(2, "B"), user(1, "A")];
    let cols = vec![
        Column::new("id", "ID").sortable(),
        Column::new("name", "Name").sortable(),
    ];
    let props = TableProps::new(&rows, &cols);
    let mut table = table();

    let id_click = table.render(&props).header[0].on_click.clone().unwrap();
    let name_click = table.render(&props).header[1].on_click.clone().unwrap();

    assert_eq!(table.dispatch(&id_click, &props), EventResult::Consumed);
    assert_eq!(table.sort_state(), Some(&SortState::ascending("id")));
    assert_eq!(view_ids(&table.render(&props)), vec![Identity::Int(1), Identity::Int(2)]);

    table.dispatch(&id_click, &props);
    assert_eq!(table.sort_state(), Some(&SortState::descending("id")));
    assert_eq!(view_ids(&table.render(&props)), vec![Identity::Int(2), Identity::Int(1)]);

    table.dispatch(&name_click, &props);
    assert_eq!(table.sort_state(), Some(&SortState::ascending("name")));
    assert_eq!(ids(&table.sorted_rows(&rows)), vec![1, 2]);

    // The host's collection is untouched.
    assert_eq!(rows[0].id, 2);
}

#[test]
fn test_header_indicator_only_on_active_sortable_column() {
    let rows = sample_users();
    let cols = columns();
    let props = TableProps::new(&rows, &cols);
    let mut table = table();

    let view = table.render(&props);
    assert!(view.header.iter().all(|h| h.indicator.is_none()));

    table.on_header_click(&cols[1]);
    let view = table.render(&props);
    assert_eq!(view.header[0].indicator, None);
    assert_eq!(view.header[1].indicator, Some(SortDirection::Ascending));
    assert_eq!(view.header[2].indicator, None);
    assert_eq!(view.header_text(&view.header[1]), "Name ↑");
    assert_eq!(view.header_text(&view.header[0]), "ID");

    table.on_header_click(&cols[1]);
    let view = table.render(&props);
    assert_eq!(view.header_text(&view.header[1]), "Name ↓");
}

#[test]
fn test_non_sortable_header_click_is_noop() {
    let rows = sample_users();
    let cols = columns();
    let props = TableProps::new(&rows, &cols);
    let mut table = table();

    table.on_header_click(&cols[0]);
    assert_eq!(table.on_header_click(&cols[2]), EventResult::Ignored);
    assert_eq!(table.sort_state(), Some(&SortState::ascending("id")));

    let view = table.render(&props);
    assert!(view.header[2].on_click.is_none());
    assert!(view.header[0].on_click.is_some());
}

#[test]
fn test_sort_action_for_unknown_column_is_ignored() {
    let rows = sample_users();
    let cols = columns();
    let props = TableProps::new(&rows, &cols);
    let mut table = table();

    let action = Action::Sort {
        column: "age".to_string(),
    };
    assert_eq!(table.dispatch(&action, &props), EventResult::Ignored);
    assert!(table.sort_state().is_none());
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_multiple_selection_toggle_and_callback_order() {
    init_logger();
    let rows = sample_users();
    let cols = columns();
    let props = TableProps::new(&rows, &cols).selectable(true);
    let (mut table, calls) = recording_table(SelectionMode::Multiple);

    table.dispatch(&Action::ToggleRow(2.into()), &props);
    table.dispatch(&Action::ToggleRow(1.into()), &props);
    // Row-collection order, not click order.
    assert_eq!(calls.borrow().last(), Some(&vec![1, 2]));

    table.dispatch(&Action::ToggleRow(2.into()), &props);
    assert_eq!(*calls.borrow(), vec![vec![2], vec![1, 2], vec![1]]);
    assert_eq!(ids(&table.selected_rows(&rows)), vec![1]);
    assert!(!table.is_selected(&rows[1]));
}

#[test]
fn test_single_selection_replaces() {
    let rows = sample_users();
    let (mut table, calls) = recording_table(SelectionMode::Single);

    table.on_row_click(&1.into(), &rows);
    table.on_row_click(&2.into(), &rows);
    assert_eq!(table.selection().identities(), vec![Identity::Int(2)]);

    // Clicking the selected row again keeps it selected.
    table.on_row_click(&2.into(), &rows);
    assert_eq!(table.selection().identities(), vec![Identity::Int(2)]);
    assert_eq!(*calls.borrow(), vec![vec![1], vec![2], vec![2]]);
}

#[test]
fn test_selection_survives_resort() {
    let rows = sample_users();
    let cols = columns();
    let props = TableProps::new(&rows, &cols).selectable(true);
    let mut table = table();

    table.on_row_click(&1.into(), &rows);
    table.on_header_click(&cols[0]);
    table.on_header_click(&cols[0]);

    let view = table.render(&props);
    assert_eq!(view_ids(&view), vec![Identity::Int(2), Identity::Int(1)]);
    assert!(!view.rows()[0].selected);
    assert!(view.rows()[1].selected);
}

#[test]
fn test_stale_selection_is_kept_but_not_reported() {
    let rows = sample_users();
    let (mut table, calls) = recording_table(SelectionMode::Multiple);
    table.on_row_click(&2.into(), &rows);

    let shrunk = vec![user(1, "Talish")];
    table.on_row_click(&1.into(), &shrunk);

    assert_eq!(calls.borrow().last(), Some(&vec![1]));
    assert_eq!(table.selection().len(), 2);
    assert_eq!(ids(&table.selected_rows(&rows)), vec![1, 2]);
}

#[test]
fn test_row_click_ignored_when_not_selectable() {
    let rows = sample_users();
    let cols = columns();
    let props = TableProps::new(&rows, &cols);
    let (mut table, calls) = recording_table(SelectionMode::Multiple);

    let result = table.dispatch(&Action::ToggleRow(1.into()), &props);
    assert_eq!(result, EventResult::Ignored);
    assert!(calls.borrow().is_empty());
    assert!(table.selection().is_empty());

    let view = table.render(&props);
    assert!(view.rows().iter().all(|r| r.on_click.is_none() && r.selector.is_none()));
}

#[test]
fn test_selector_kind_follows_mode() {
    let rows = sample_users();
    let cols = columns();
    let props = TableProps::new(&rows, &cols).selectable(true);

    let multi = table().render(&props);
    assert_eq!(multi.rows()[0].selector, Some(SelectorKind::Checkbox));
    assert_eq!(multi.rows()[0].on_click, Some(Action::ToggleRow(1.into())));

    let single = table().with_selection(SelectionMode::Single).render(&props);
    assert_eq!(single.rows()[0].selector, Some(SelectorKind::Radio));
}

// ============================================================================
// Render modes
// ============================================================================

#[test]
fn test_render_mode_priority() {
    let rows: Vec<User> = (1..=5).map(|i| user(i, "U")).collect();
    let none: Vec<User> = Vec::new();
    let cols = columns();
    let table = table();

    assert_eq!(
        table.render_mode(&TableProps::new(&rows, &cols).loading(true)),
        RenderMode::Loading
    );
    assert_eq!(
        table.render_mode(&TableProps::new(&none, &cols).loading(true)),
        RenderMode::Loading
    );
    assert_eq!(table.render_mode(&TableProps::new(&none, &cols)), RenderMode::Empty);
    assert_eq!(table.render_mode(&TableProps::new(&rows, &cols)), RenderMode::Populated);
}

#[test]
fn test_loading_status_row_spans_all_columns() {
    let rows = sample_users();
    let cols = columns();
    let view = table().render(&TableProps::new(&rows, &cols).loading(true).selectable(true));

    assert_eq!(view.mode(), RenderMode::Loading);
    assert_eq!(
        view.body,
        TableBody::Status {
            mode: RenderMode::Loading,
            message: "Loading...".to_string(),
            span: 4,
        }
    );
    assert!(view.rows().is_empty());
}

#[test]
fn test_empty_status_row() {
    let rows: Vec<User> = Vec::new();
    let cols = columns();
    let view = table().render(&TableProps::new(&rows, &cols));

    assert_eq!(
        view.body,
        TableBody::Status {
            mode: RenderMode::Empty,
            message: "No data available".to_string(),
            span: 3,
        }
    );
}

#[test]
fn test_cells_stringify_fields() {
    let rows = vec![
        serde_json::json!({ "id": "a", "score": 1.5, "active": true }),
        serde_json::json!({ "id": "b" }),
    ];
    let cols = vec![
        Column::new("id", "ID"),
        Column::new("score", "Score"),
        Column::new("state", "Active").data_index("active"),
    ];
    let view = DataTable::by_field("id").render(&TableProps::new(&rows, &cols));

    assert_eq!(view.rows()[0].cells, vec!["a", "1.5", "true"]);
    assert_eq!(view.rows()[1].cells, vec!["b", "null", "null"]);
    assert_eq!(view.rows()[1].identity, Identity::from("b"));
}

// ============================================================================
// Validation and snapshots
// ============================================================================

#[test]
fn test_validate_reports_duplicates() {
    let rows = vec![user(1, "A"), user(2, "B"), user(1, "C")];
    let cols = columns();
    let table = table();

    let err = table.validate(&TableProps::new(&rows, &cols)).unwrap_err();
    assert_eq!(
        err,
        SchemaError::DuplicateIdentity {
            identity: Identity::Int(1),
            first: 0,
            second: 2,
        }
    );

    let dup_cols = vec![Column::new("id", "ID"), Column::new("id", "Again")];
    let rows = sample_users();
    let err = table.validate(&TableProps::new(&rows, &dup_cols)).unwrap_err();
    assert_eq!(err.to_string(), "Duplicate column key 'id'");
}

#[test]
fn test_warn_on_invalid_still_renders() {
    init_logger();
    let rows = vec![user(1, "A"), user(1, "B")];
    let cols = columns();
    let table = table().config(TableConfig::default().warn_on_invalid());

    let view = table.render(&TableProps::new(&rows, &cols));
    assert_eq!(view.rows().len(), 2);
}

#[test]
fn test_plain_text_snapshot() {
    let rows = sample_users();
    let cols = vec![
        Column::new("id", "ID").sortable(),
        Column::new("name", "Name").sortable(),
    ];
    let props = TableProps::new(&rows, &cols);
    let mut table = table();
    table.on_header_click(&cols[1]);
    table.on_header_click(&cols[1]);

    let lines = render_lines(&table.render(&props).into_node());
    assert_eq!(lines, vec!["ID  Name ↓", "1   Talish", "2   Ansh"]);
}

#[test]
fn test_node_carries_row_actions() {
    let rows = sample_users();
    let cols = columns();
    let props = TableProps::new(&rows, &cols).selectable(true);
    let table = table();
    let node = table.render(&props).into_node();

    let first_row = &node.children()[1];
    assert_eq!(first_row.id(), Some(format!("{}-row-1", table.id()).as_str()));
    assert_eq!(first_row.on_click(), Some(&Action::ToggleRow(1.into())));

    let actions = node.actions();
    assert!(actions.contains(&&Action::Sort {
        column: "id".to_string()
    }));
    assert!(actions.contains(&&Action::ToggleRow(2.into())));
    assert!(!actions.contains(&&Action::Sort {
        column: "email".to_string()
    }));
}

//! Tests for the TextField component.

use std::cell::RefCell;
use std::rc::Rc;

use simplelog::{Config as LogConfig, LevelFilter, TestLogger};
use tabula::components::input::{Affordance, FieldMessage};
use tabula::prelude::*;
use tabula::text::render_lines;

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, LogConfig::default());
}

fn recording_field() -> (TextField, Rc<RefCell<Vec<String>>>) {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    let field = TextField::new().on_change(move |value: &str| sink.borrow_mut().push(value.to_string()));
    (field, changes)
}

#[test]
fn test_password_hidden_by_default() {
    let field = TextField::new();
    let props = FieldProps::new("secret").password_toggle();

    assert!(!field.is_password_visible());
    assert_eq!(field.effective_type(&props), InputType::Password);
    assert!(field.render(&props).is_masked());
}

#[test]
fn test_toggle_reveals_password_regardless_of_input_type() {
    init_logger();
    let mut field = TextField::new();
    let props = FieldProps::new("secret")
        .input_type(InputType::Email)
        .password_toggle();

    assert_eq!(field.dispatch(&Action::TogglePassword, &props), EventResult::Consumed);
    assert_eq!(field.effective_type(&props), InputType::Text);
    assert_eq!(field.render(&props).display_value(), "secret");

    field.dispatch(&Action::TogglePassword, &props);
    assert_eq!(field.effective_type(&props), InputType::Password);
    assert_eq!(field.render(&props).display_value(), "••••••");
}

#[test]
fn test_input_type_passes_through_without_toggle() {
    let mut field = TextField::new();
    let props = FieldProps::new("42").input_type(InputType::Number);

    assert_eq!(field.effective_type(&props), InputType::Number);
    assert_eq!(field.dispatch(&Action::TogglePassword, &props), EventResult::Ignored);
    assert!(!field.is_password_visible());
}

#[test]
fn test_clear_reports_empty_value() {
    let (mut field, changes) = recording_field();
    let props = FieldProps::new("hello").clearable();

    assert_eq!(field.dispatch(&Action::Clear, &props), EventResult::Consumed);
    assert_eq!(*changes.borrow(), vec![String::new()]);
}

#[test]
fn test_clear_ignored_when_not_offered() {
    let (mut field, changes) = recording_field();

    for props in [
        FieldProps::new("hello"),
        FieldProps::new("").clearable(),
        FieldProps::new("hello").clearable().disabled(true),
        FieldProps::new("hello").clearable().loading(true),
    ] {
        assert_eq!(field.on_clear(&props), EventResult::Ignored);
    }
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_input_forwarded_unless_disabled() {
    let (mut field, changes) = recording_field();

    field.on_input("a", &FieldProps::new(""));
    field.on_input("ab", &FieldProps::new("a").disabled(true));
    field.on_input("ab", &FieldProps::new("a").loading(true));

    assert_eq!(*changes.borrow(), vec!["a".to_string()]);
}

#[test]
fn test_affordances() {
    let field = TextField::new();

    let view = field.render(&FieldProps::new("x").clearable().password_toggle());
    assert_eq!(
        view.affordances,
        vec![Affordance::Clear, Affordance::PasswordToggle { visible: false }]
    );

    let view = field.render(&FieldProps::new("x").clearable().loading(true));
    assert_eq!(view.affordances, vec![Affordance::Spinner]);
    assert!(view.disabled);

    let view = field.render(&FieldProps::new("").clearable());
    assert!(view.affordances.is_empty());
}

#[test]
fn test_helper_and_error_are_exclusive() {
    let field = TextField::new();

    let helper = field.render(&FieldProps::new("").helper_text("We never share it"));
    assert_eq!(
        helper.message,
        Some(FieldMessage::Helper("We never share it".to_string()))
    );

    let error = field.render(
        &FieldProps::new("")
            .helper_text("We never share it")
            .error("Required"),
    );
    assert_eq!(error.message, Some(FieldMessage::Error("Required".to_string())));

    // Invalid without a message shows nothing, not the helper.
    let bare = field.render(&FieldProps::new("").helper_text("hint").invalid(true));
    assert_eq!(bare.message, None);
}

#[test]
fn test_node_snapshot() {
    let mut field = TextField::new();
    let props = FieldProps::new("abc")
        .label("Password")
        .helper_text("At least 3 characters")
        .clearable()
        .password_toggle();

    let node = field.render(&props).into_node();
    assert_eq!(
        render_lines(&node),
        vec!["Password", "[•••] ✕ show", "At least 3 characters"]
    );
    let actions = node.actions();
    assert_eq!(actions, vec![&Action::Clear, &Action::TogglePassword]);

    field.toggle_password();
    let node = field.render(&props).into_node();
    assert_eq!(render_lines(&node)[1], "[abc] ✕ hide");
}

#[test]
fn test_field_ignores_table_actions() {
    let mut field = TextField::new();
    let props = FieldProps::new("x");
    let action = Action::Sort {
        column: "id".to_string(),
    };
    assert_eq!(field.dispatch(&action, &props), EventResult::Ignored);
}

#[test]
fn test_unlabeled_field_renders_inline() {
    let field = TextField::new();
    let props = FieldProps::new("abc").clearable().password_toggle();

    let node = field.render(&props).into_node();
    assert_eq!(render_lines(&node), vec!["[•••] ✕ show"]);
}

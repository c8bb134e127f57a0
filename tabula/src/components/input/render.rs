//! Text field render description.

use crate::components::events::Action;
use crate::config::FieldConfig;
use crate::node::{Layout, Node};
use crate::style::{Color, Style};

use super::state::{FieldProps, FieldSize, InputType, TextField, Variant};

/// Trailing control inside the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    /// Loading indicator
    Spinner,
    /// Clears the value
    Clear,
    /// Shows or hides the password; `visible` is the current state
    PasswordToggle { visible: bool },
}

impl Affordance {
    /// Action fired when the affordance is clicked.
    pub fn action(&self) -> Option<Action> {
        match self {
            Affordance::Spinner => None,
            Affordance::Clear => Some(Action::Clear),
            Affordance::PasswordToggle { .. } => Some(Action::TogglePassword),
        }
    }
}

/// Message shown below the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMessage {
    Helper(String),
    Error(String),
}

/// Render description of a text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub id: String,
    pub label: Option<String>,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub disabled: bool,
    pub invalid: bool,
    pub variant: Variant,
    pub size: FieldSize,
    /// Controls after the input, in display order
    pub affordances: Vec<Affordance>,
    pub message: Option<FieldMessage>,
    config: FieldConfig,
}

impl FieldView {
    /// Whether the value is rendered masked.
    pub fn is_masked(&self) -> bool {
        self.input_type == InputType::Password
    }

    /// Value as it appears on screen.
    pub fn display_value(&self) -> String {
        if self.is_masked() {
            std::iter::repeat_n(self.config.mask, self.value.chars().count()).collect()
        } else {
            self.value.clone()
        }
    }

    fn input_style(&self) -> Style {
        let mut style = match self.variant {
            Variant::Filled => Style::new().bg(Color::named("input.filled_bg")),
            Variant::Outlined => Style::new().border(Color::named("input.border")),
            Variant::Ghost => Style::new().underline(),
        };
        if self.invalid {
            style = style.border(Color::named("error"));
        }
        if self.disabled {
            style = style.dim();
        }
        style
    }

    fn input_layout(&self) -> Layout {
        let layout = Layout::default();
        match self.size {
            FieldSize::Small => layout.padding(1, 0),
            FieldSize::Medium => layout.padding(2, 0),
            FieldSize::Large => layout.padding(3, 1),
        }
    }

    fn affordance_node(&self, affordance: &Affordance) -> Node {
        let glyph = match affordance {
            Affordance::Spinner => &self.config.spinner,
            Affordance::Clear => &self.config.clear_glyph,
            Affordance::PasswordToggle { visible: true } => &self.config.hide_password_glyph,
            Affordance::PasswordToggle { visible: false } => &self.config.show_password_glyph,
        };
        let content = Node::text_styled(glyph.clone(), Style::new().fg(Color::named("text.muted")));
        match affordance.action() {
            Some(action) => Node::Button {
                id: Some(format!("{}-{}", self.id, action)),
                child: Box::new(content),
                on_click: Some(action),
                style: Style::new(),
                layout: Layout::default(),
            },
            None => content,
        }
    }

    /// Convert to a node tree for the rendering engine.
    pub fn into_node(self) -> Node {
        let mut children = Vec::with_capacity(3);

        if let Some(label) = &self.label {
            children.push(Node::text_styled(label.clone(), Style::new().bold()));
        }

        let mut input_row = Vec::with_capacity(self.affordances.len() + 1);
        input_row.push(Node::Input {
            value: self.value.clone(),
            placeholder: self.placeholder.clone(),
            mask: self.is_masked().then_some(self.config.mask),
            disabled: self.disabled,
            id: Some(self.id.clone()),
            style: self.input_style(),
            layout: self.input_layout(),
        });
        input_row.extend(self.affordances.iter().map(|a| self.affordance_node(a)));
        children.push(Node::row(input_row));

        match &self.message {
            Some(FieldMessage::Helper(text)) => children.push(Node::text_styled(
                text.clone(),
                Style::new().fg(Color::named("text.muted")),
            )),
            Some(FieldMessage::Error(text)) => children.push(Node::text_styled(
                text.clone(),
                Style::new().fg(Color::named("error")),
            )),
            None => {}
        }

        Node::column(children)
    }
}

impl TextField {
    /// Build the render description for the current state and props.
    pub fn render(&self, props: &FieldProps<'_>) -> FieldView {
        let mut affordances = Vec::with_capacity(2);
        if props.loading {
            affordances.push(Affordance::Spinner);
        } else if props.shows_clear() {
            affordances.push(Affordance::Clear);
        }
        if props.password_toggle {
            affordances.push(Affordance::PasswordToggle {
                visible: self.is_password_visible(),
            });
        }

        let message = match (props.visible_error(), props.visible_helper()) {
            (Some(error), _) => Some(FieldMessage::Error(error.to_string())),
            (None, Some(helper)) => Some(FieldMessage::Helper(helper.to_string())),
            (None, None) => None,
        };

        FieldView {
            id: self.id.to_string(),
            label: props.label.map(str::to_string),
            value: props.value.to_string(),
            placeholder: props.placeholder.to_string(),
            input_type: self.effective_type(props),
            disabled: props.is_input_disabled(),
            invalid: props.invalid,
            variant: props.variant,
            size: props.size,
            affordances,
            message,
            config: self.config.clone(),
        }
    }
}

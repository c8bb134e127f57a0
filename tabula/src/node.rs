//! Abstract render description handed to the rendering engine.
//!
//! Widgets never draw. They build a `Node` tree whose clickable parts carry
//! an [`Action`]; the engine lays it out, and routes clicks back to the
//! widget's `dispatch`.

use crate::components::events::Action;
use crate::style::Style;

/// Content alignment within a cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Start,
    Center,
}

/// Size specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    /// Fill the parent
    Fill,
    /// Auto size based on content
    #[default]
    Auto,
}

/// Layout properties for a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Width
    pub width: Size,
    /// Number of grid columns this node spans (table cells)
    pub span: u16,
    /// Horizontal padding
    pub padding_h: u16,
    /// Vertical padding
    pub padding_v: u16,
    /// Content alignment
    pub align: Align,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: Size::Auto,
            span: 1,
            padding_h: 0,
            padding_v: 0,
            align: Align::Start,
        }
    }
}

impl Layout {
    /// Layout spanning `span` grid columns and filling the available width
    pub fn spanning(span: u16) -> Self {
        Self {
            width: Size::Fill,
            span,
            ..Default::default()
        }
    }

    /// Set alignment
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set padding
    pub fn padding(mut self, horizontal: u16, vertical: u16) -> Self {
        self.padding_h = horizontal;
        self.padding_v = vertical;
        self
    }
}

/// A node in the view tree
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    /// Empty node (renders nothing)
    #[default]
    Empty,

    /// Text content
    Text { content: String, style: Style },

    /// Container with vertical layout
    Column {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },

    /// Container with horizontal layout
    Row {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },

    /// Clickable region
    Button {
        /// Visible content
        child: Box<Node>,
        /// Action routed back to the owning widget
        on_click: Option<Action>,
        /// Element ID for hit testing
        id: Option<String>,
        style: Style,
        layout: Layout,
    },

    /// Editable text input
    Input {
        /// Current value
        value: String,
        /// Placeholder text
        placeholder: String,
        /// Mask character for hidden values
        mask: Option<char>,
        /// Input accepts no edits
        disabled: bool,
        /// Element ID for focus
        id: Option<String>,
        style: Style,
        layout: Layout,
    },
}

impl Node {
    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            style: Style::new(),
        }
    }

    /// Create a text node with style
    pub fn text_styled(content: impl Into<String>, style: Style) -> Self {
        Self::Text {
            content: content.into(),
            style,
        }
    }

    /// Create a column node
    pub fn column(children: Vec<Node>) -> Self {
        Self::Column {
            children,
            style: Style::new(),
            layout: Layout::default(),
        }
    }

    /// Create a column node with style and layout
    pub fn column_styled(children: Vec<Node>, style: Style, layout: Layout) -> Self {
        Self::Column {
            children,
            style,
            layout,
        }
    }

    /// Create a row node
    pub fn row(children: Vec<Node>) -> Self {
        Self::Row {
            children,
            style: Style::new(),
            layout: Layout::default(),
        }
    }

    /// Create a row node with style and layout
    pub fn row_styled(children: Vec<Node>, style: Style, layout: Layout) -> Self {
        Self::Row {
            children,
            style,
            layout,
        }
    }

    /// Get the element ID if any
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Input { id, .. } | Self::Button { id, .. } => id.as_deref(),
            _ => None,
        }
    }

    /// Get the click action if this node is clickable
    pub fn on_click(&self) -> Option<&Action> {
        match self {
            Self::Button { on_click, .. } => on_click.as_ref(),
            _ => None,
        }
    }

    /// Child nodes of a container
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Column { children, .. } | Self::Row { children, .. } => children,
            Self::Button { child, .. } => std::slice::from_ref(child.as_ref()),
            _ => &[],
        }
    }

    /// Collect every action reachable in this tree, depth first.
    pub fn actions(&self) -> Vec<&Action> {
        let mut out = Vec::new();
        self.collect_actions(&mut out);
        out
    }

    fn collect_actions<'a>(&'a self, out: &mut Vec<&'a Action>) {
        if let Some(action) = self.on_click() {
            out.push(action);
        }
        for child in self.children() {
            child.collect_actions(out);
        }
    }
}

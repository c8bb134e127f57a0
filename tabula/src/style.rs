//! Style tokens carried on render nodes.
//!
//! Colors are theme token names; the rendering engine resolves them.

/// A color reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// Named theme color (resolved by the rendering engine)
    Named(String),
}

impl Color {
    /// Create a named color
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

/// Text and element styling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground color
    pub fg: Option<Color>,
    /// Background color
    pub bg: Option<Color>,
    /// Border color
    pub border: Option<Color>,
    /// Bold text
    pub bold: bool,
    /// Dim/faint text
    pub dim: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a new empty style
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            border: None,
            bold: false,
            dim: false,
            underline: false,
        }
    }

    /// Set foreground color
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set background color
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set border color
    pub fn border(mut self, color: Color) -> Self {
        self.border = Some(color);
        self
    }

    /// Set bold
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set dim
    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Set underline
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

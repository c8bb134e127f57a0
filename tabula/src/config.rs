//! Display configuration for the components.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides.

use serde::Deserialize;

use crate::error::ConfigError;

/// Labels and glyphs used by the table component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Status row text while loading.
    pub loading_label: String,
    /// Status row text when there are no rows.
    pub empty_label: String,
    /// Appended to the header of the active ascending column.
    pub ascending_indicator: String,
    /// Appended to the header of the active descending column.
    pub descending_indicator: String,
    /// Shown before the loading label.
    pub spinner: String,
    pub checkbox_on: String,
    pub checkbox_off: String,
    pub radio_on: String,
    pub radio_off: String,
    /// Validate rows and columns on every render and log problems.
    pub warn_on_invalid: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            loading_label: "Loading...".into(),
            empty_label: "No data available".into(),
            ascending_indicator: " ↑".into(),
            descending_indicator: " ↓".into(),
            spinner: "⠋".into(),
            checkbox_on: "■ ".into(),
            checkbox_off: "□ ".into(),
            radio_on: "◉ ".into(),
            radio_off: "○ ".into(),
            warn_on_invalid: false,
        }
    }
}

impl TableConfig {
    /// Set the loading status text.
    pub fn loading_label(mut self, label: impl Into<String>) -> Self {
        self.loading_label = label.into();
        self
    }

    /// Set the empty status text.
    pub fn empty_label(mut self, label: impl Into<String>) -> Self {
        self.empty_label = label.into();
        self
    }

    /// Set the sort direction indicators.
    pub fn indicators(mut self, ascending: impl Into<String>, descending: impl Into<String>) -> Self {
        self.ascending_indicator = ascending.into();
        self.descending_indicator = descending.into();
        self
    }

    /// Validate rows and columns on every render, logging problems.
    pub fn warn_on_invalid(mut self) -> Self {
        self.warn_on_invalid = true;
        self
    }
}

/// Glyphs used by the text field component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Clear affordance.
    pub clear_glyph: String,
    /// Toggle shown while the password is hidden.
    pub show_password_glyph: String,
    /// Toggle shown while the password is visible.
    pub hide_password_glyph: String,
    /// Shown in the affordance slot while loading.
    pub spinner: String,
    /// Character used to mask hidden passwords.
    pub mask: char,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            clear_glyph: "✕".into(),
            show_password_glyph: "show".into(),
            hide_password_glyph: "hide".into(),
            spinner: "⠋".into(),
            mask: '•',
        }
    }
}

/// Configuration for all components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub table: TableConfig,
    pub field: FieldConfig,
}

impl Config {
    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str(source)?;
        Ok(config)
    }

    /// Set the table config.
    pub fn table(mut self, table: TableConfig) -> Self {
        self.table = table;
        self
    }

    /// Set the field config.
    pub fn field(mut self, field: FieldConfig) -> Self {
        self.field = field;
        self
    }
}

//! Token pipeline configuration.
//!
//! Configuration is usually kept next to the token files as TOML:
//!
//! ```toml
//! base_theme = "base"
//! theme_prefix = "_"
//! root_selector = ":root"
//!
//! [aliases]
//! color = "colors"
//!
//! [conditions]
//! dark = "[data-color-mode=dark]"
//! light = "[data-color-mode=light]"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::alias::CategoryAliases;
use crate::theme::{DEFAULT_BASE_THEME, DEFAULT_THEME_PREFIX, ThemeKeys};
use crate::{Error, Result};

/// Default selector for base theme declarations.
pub const DEFAULT_ROOT_SELECTOR: &str = ":root";

/// Settings for parsing, aggregating and emitting tokens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Identifier of the base theme.
    pub base_theme: String,
    /// Prefix for non-base theme keys.
    pub theme_prefix: String,
    /// Category aliases added on top of the default table.
    pub aliases: BTreeMap<String, String>,
    /// Selector for base theme declarations.
    pub root_selector: String,
    /// Selector per non-base theme.
    pub conditions: BTreeMap<String, String>,
}

impl TokenConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml(&content)
    }

    /// Set the base theme identifier.
    pub fn base_theme(mut self, base: impl Into<String>) -> Self {
        self.base_theme = base.into();
        self
    }

    /// Set the prefix for non-base theme keys.
    pub fn theme_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.theme_prefix = prefix.into();
        self
    }

    /// Add a category alias.
    pub fn alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.aliases.insert(from.into(), to.into());
        self
    }

    /// Set the selector for a theme's declarations.
    pub fn condition(mut self, theme: impl Into<String>, selector: impl Into<String>) -> Self {
        self.conditions.insert(theme.into(), selector.into());
        self
    }

    /// Build the alias table: defaults plus configured aliases.
    pub fn category_aliases(&self) -> CategoryAliases {
        let mut aliases = CategoryAliases::new();
        for (from, to) in &self.aliases {
            aliases.set(from.as_str(), to.as_str());
        }
        aliases
    }

    /// Build the theme key policy.
    pub fn theme_keys(&self) -> ThemeKeys {
        ThemeKeys::new(self.base_theme.as_str(), self.theme_prefix.as_str())
    }

    /// Get the selector a theme's declarations are emitted under.
    ///
    /// The base theme uses the root selector; other themes use their
    /// configured condition or `[data-theme=<name>]`.
    pub fn selector_for(&self, theme: &str) -> String {
        if theme == self.base_theme {
            return self.root_selector.clone();
        }
        self.conditions
            .get(theme)
            .cloned()
            .unwrap_or_else(|| format!("[data-theme={theme}]"))
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            base_theme: DEFAULT_BASE_THEME.to_string(),
            theme_prefix: DEFAULT_THEME_PREFIX.to_string(),
            aliases: BTreeMap::new(),
            root_selector: DEFAULT_ROOT_SELECTOR.to_string(),
            conditions: BTreeMap::new(),
        }
    }
}

//! Category name normalization.

use std::collections::HashMap;

/// Aliases every token set starts with.
///
/// Authoring sources name the spacing family `space*`; the CSS side uses
/// `spacing*`.
pub const DEFAULT_CATEGORY_ALIASES: &[(&str, &str)] = &[
    ("space", "spacing"),
    ("spaceInset", "spacingInset"),
    ("spaceOffset", "spacingOffset"),
    ("spaceGap", "spacingGap"),
];

/// Maps raw category names to canonical ones.
///
/// Unknown names pass through unchanged; the table normalizes, it does not
/// validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAliases {
    aliases: HashMap<String, String>,
}

impl CategoryAliases {
    /// Create an alias table with only the default aliases.
    pub fn new() -> Self {
        Self {
            aliases: DEFAULT_CATEGORY_ALIASES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    /// Create an alias table with no aliases at all.
    pub fn empty() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Add an alias, returning the table for chaining.
    pub fn with(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.set(from, to);
        self
    }

    /// Add or replace an alias.
    pub fn set(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.aliases.insert(from.into(), to.into());
    }

    /// Get the canonical name for a raw category name.
    pub fn normalize<'a>(&'a self, category: &'a str) -> &'a str {
        self.aliases
            .get(category)
            .map(String::as_str)
            .unwrap_or(category)
    }

    /// Check if a name is an alias.
    pub fn is_alias(&self, category: &str) -> bool {
        self.aliases.contains_key(category)
    }

    /// Iterate over all aliases.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for CategoryAliases {
    fn default() -> Self {
        Self::new()
    }
}

//! Theme keys used in semantic token values.

/// Default identifier of the base theme.
pub const DEFAULT_BASE_THEME: &str = "base";

/// Default prefix for non-base theme keys.
pub const DEFAULT_THEME_PREFIX: &str = "_";

/// Derives the key each theme's values are stored under.
///
/// The base theme keeps its own name; every other theme is prefixed, so a
/// consumer can tell the default value from a conditional override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeKeys {
    base: String,
    prefix: String,
}

impl ThemeKeys {
    /// Create a key policy.
    pub fn new(base: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            prefix: prefix.into(),
        }
    }

    /// The base theme identifier.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The prefix applied to non-base themes.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Check if a theme is the base theme.
    pub fn is_base(&self, theme: &str) -> bool {
        theme == self.base
    }

    /// Get the key for a theme.
    pub fn key_for(&self, theme: &str) -> String {
        if self.is_base(theme) {
            theme.to_string()
        } else {
            format!("{}{}", self.prefix, theme)
        }
    }

    /// Map a key back to its theme name.
    pub fn theme_for<'a>(&self, key: &'a str) -> Option<&'a str> {
        if key == self.base {
            Some(key)
        } else {
            key.strip_prefix(self.prefix.as_str())
        }
    }
}

impl Default for ThemeKeys {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_THEME, DEFAULT_THEME_PREFIX)
    }
}

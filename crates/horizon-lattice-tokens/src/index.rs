//! Lookup of tokens by their formatted name.

use std::collections::HashMap;

use crate::naming::{format_css_var, format_token_name};
use crate::types::ParsedTokenSet;

/// Maps token names (`$colors-blue-100`) to CSS references
/// (`var(--colors-blue-100)`).
#[derive(Debug, Clone, Default)]
pub struct TokenIndex {
    references: HashMap<String, String>,
}

impl TokenIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every leaf of a parsed token set.
    pub fn from_tokens(tokens: &ParsedTokenSet) -> Self {
        let mut index = Self::new();
        tokens.for_each_leaf(|path, _| {
            index.insert_path(path);
        });
        index
    }

    /// Index a single token path.
    pub fn insert_path<S: AsRef<str>>(&mut self, path: &[S]) {
        self.references
            .insert(format_token_name(path), format_css_var(path).reference);
    }

    /// Get the CSS reference for a token name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.references.get(name).map(String::as_str)
    }

    /// Check if a token name is indexed.
    pub fn contains(&self, name: &str) -> bool {
        self.references.contains_key(name)
    }

    /// Get the number of indexed tokens.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::CategoryAliases;
    use crate::parser::parse_tokens;
    use crate::types::RawDictionary;

    #[test]
    fn indexes_every_leaf() {
        let raw: RawDictionary = serde_json::from_value(serde_json::json!({
            "colors": { "blue-100": "#00f", "white": "#fff" },
            "spaceInset": { "100": "8px" },
        }))
        .unwrap();
        let index = TokenIndex::from_tokens(&parse_tokens(&raw, &CategoryAliases::new()));

        assert_eq!(index.len(), 3);
        assert_eq!(index.get("$colors-blue-100"), Some("var(--colors-blue-100)"));
        assert_eq!(index.get("$colors-white"), Some("var(--colors-white)"));
        assert_eq!(index.get("$spacing-inset-100"), Some("var(--spacingInset-100)"));
        assert!(!index.contains("$colors-blue"));
    }
}

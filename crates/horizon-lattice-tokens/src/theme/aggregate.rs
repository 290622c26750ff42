//! Theme aggregation into semantic tokens.
//!
//! Every theme is parsed on its own, then all parsed trees are folded into
//! one tree where each leaf holds a value per theme key:
//!
//! ```text
//! base:  { colors: { danger: "#f00" } }
//! dark:  { colors: { danger: "#900" } }
//!
//! =>     { colors: { danger: { value: { base: "#f00", _dark: "#900" } } } }
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use super::key::ThemeKeys;
use super::set::ThemeSet;
use crate::alias::CategoryAliases;
use crate::parser::parse_tokens;
use crate::types::{ParsedTokenSet, TokenNode, VALUE_KEY};

/// Values of one token, keyed by theme key.
pub type ThemeValues = BTreeMap<String, String>;

/// A token with one value per theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SemanticToken {
    /// Theme key to resolved value.
    pub value: ThemeValues,
}

/// A subcategory of the semantic tree.
///
/// A subcategory that was a plain token, or a branch with a value of its
/// own, carries that value directly in `value`; nested tokens live in
/// `tokens`. Both can be present at once. No entry of `tokens` is named
/// `value`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SemanticGroup {
    /// Direct values, for subcategories without further nesting.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub value: ThemeValues,
    /// Nested tokens.
    #[serde(flatten)]
    pub tokens: BTreeMap<String, SemanticToken>,
}

impl SemanticGroup {
    /// Get a nested token.
    pub fn token(&self, name: &str) -> Option<&SemanticToken> {
        self.tokens.get(name)
    }
}

/// The theme-aware token tree: category, subcategory, then token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SemanticTokenTree {
    categories: BTreeMap<String, BTreeMap<String, SemanticGroup>>,
}

impl SemanticTokenTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one theme's parsed tokens into the tree under `theme_key`.
    ///
    /// Existing values for the same coordinate and theme key are replaced.
    pub fn add_theme(&mut self, theme_key: &str, parsed: &ParsedTokenSet) {
        for (category_name, category) in parsed.iter() {
            let groups = self.categories.entry(category_name.to_string()).or_default();

            for (sub_category, node) in category.iter() {
                let group = groups.entry(sub_category.to_string()).or_default();

                match node {
                    TokenNode::Token(token) => {
                        group.value.insert(theme_key.to_string(), token.value.clone());
                    }
                    TokenNode::Category(tokens) => {
                        if let Some(value) = tokens.value() {
                            group.value.insert(theme_key.to_string(), value.to_string());
                        }
                        for (token_name, child) in tokens.iter() {
                            match child {
                                TokenNode::Token(token) => {
                                    record(group, token_name, theme_key, &token.value);
                                }
                                TokenNode::Category(deeper) => {
                                    deeper.for_each_leaf(|path, token| {
                                        if path.is_empty() {
                                            record(group, token_name, theme_key, &token.value);
                                        } else {
                                            let name = format!("{}-{}", token_name, path.join("-"));
                                            record(group, &name, theme_key, &token.value);
                                        }
                                    });
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    /// Get a subcategory.
    pub fn get(&self, category: &str, sub_category: &str) -> Option<&SemanticGroup> {
        self.categories.get(category)?.get(sub_category)
    }

    /// Get a direct subcategory value for a theme key.
    pub fn value(&self, category: &str, sub_category: &str, theme_key: &str) -> Option<&str> {
        self.get(category, sub_category)?
            .value
            .get(theme_key)
            .map(String::as_str)
    }

    /// Get a nested token value for a theme key.
    pub fn token_value(
        &self,
        category: &str,
        sub_category: &str,
        token: &str,
        theme_key: &str,
    ) -> Option<&str> {
        self.get(category, sub_category)?
            .token(token)?
            .value
            .get(theme_key)
            .map(String::as_str)
    }

    /// Iterate over categories and their subcategories.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, SemanticGroup>)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Record one theme's value for a token of a group.
///
/// A token named [`VALUE_KEY`] is the group's own value, so it can never
/// serialize next to the group's `value` map.
fn record(group: &mut SemanticGroup, token: &str, theme_key: &str, value: &str) {
    let values = if token == VALUE_KEY {
        &mut group.value
    } else {
        &mut group.tokens.entry(token.to_string()).or_default().value
    };
    values.insert(theme_key.to_string(), value.to_string());
}

/// Parse every theme of a set on its own.
pub fn parse_themes(themes: &ThemeSet, aliases: &CategoryAliases) -> BTreeMap<String, ParsedTokenSet> {
    themes
        .iter()
        .map(|(name, raw)| (name.to_string(), parse_tokens(raw, aliases)))
        .collect()
}

/// Parse every theme and merge them into one semantic tree.
///
/// Themes are folded in name order. A coordinate missing from a theme is
/// simply absent from that theme's key.
pub fn aggregate(themes: &ThemeSet, keys: &ThemeKeys, aliases: &CategoryAliases) -> SemanticTokenTree {
    if !themes.is_empty() && !themes.contains(keys.base()) {
        tracing::warn!("no '{}' theme found; every theme key will be prefixed", keys.base());
    }

    let mut tree = SemanticTokenTree::new();
    for (theme, parsed) in parse_themes(themes, aliases) {
        let theme_key = keys.key_for(&theme);
        tracing::debug!("aggregating theme '{}' as '{}'", theme, theme_key);
        tree.add_theme(&theme_key, &parsed);
    }
    tree
}

//! Configured token pipeline.

use crate::alias::CategoryAliases;
use crate::builder::build_category;
use crate::config::TokenConfig;
use crate::css::{CssRule, semantic_stylesheet, token_stylesheet};
use crate::index::TokenIndex;
use crate::parser::parse_tokens;
use crate::reference::resolve_token;
use crate::theme::{SemanticTokenTree, ThemeKeys, ThemeSet, aggregate};
use crate::types::{Category, ParsedTokenSet, RawDictionary, Token};

/// Runs the token passes with one configuration.
///
/// The engine holds no state besides its configuration; every call builds
/// fresh output from its input.
///
/// # Example
///
/// ```ignore
/// use horizon_lattice_tokens::prelude::*;
///
/// let config = TokenConfig::from_file("tokens/tokens.toml")?;
/// let engine = TokenEngine::new(config);
///
/// let themes = ThemeSet::from_dir("tokens/themes")?;
/// let semantic = engine.aggregate(&themes);
/// let css = engine.semantic_stylesheet(&semantic);
/// ```
#[derive(Debug, Clone)]
pub struct TokenEngine {
    config: TokenConfig,
    aliases: CategoryAliases,
    keys: ThemeKeys,
}

impl TokenEngine {
    /// Create an engine from a configuration.
    pub fn new(config: TokenConfig) -> Self {
        let aliases = config.category_aliases();
        let keys = config.theme_keys();
        Self {
            config,
            aliases,
            keys,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Get the category alias table.
    pub fn aliases(&self) -> &CategoryAliases {
        &self.aliases
    }

    /// Get the theme key policy.
    pub fn theme_keys(&self) -> &ThemeKeys {
        &self.keys
    }

    /// Resolve a single raw value in the context of `category`.
    pub fn resolve(&self, category: &str, raw: &str) -> Token {
        resolve_token(category, raw, &self.aliases)
    }

    /// Build one raw category into a tree.
    pub fn build_category(&self, category: &str, raw: &RawDictionary) -> Category {
        build_category(category, raw, &self.aliases)
    }

    /// Parse one theme's raw dictionary.
    pub fn parse_tokens(&self, raw: &RawDictionary) -> ParsedTokenSet {
        parse_tokens(raw, &self.aliases)
    }

    /// Parse every theme and merge them into one semantic tree.
    pub fn aggregate(&self, themes: &ThemeSet) -> SemanticTokenTree {
        aggregate(themes, &self.keys, &self.aliases)
    }

    /// Index a parsed token set by token name.
    pub fn index(&self, tokens: &ParsedTokenSet) -> TokenIndex {
        TokenIndex::from_tokens(tokens)
    }

    /// Emit a parsed token set under the root selector.
    pub fn token_stylesheet(&self, tokens: &ParsedTokenSet) -> CssRule {
        token_stylesheet(tokens, &self.config.root_selector)
    }

    /// Emit semantic tokens as one rule per theme.
    pub fn semantic_stylesheet(&self, tree: &SemanticTokenTree) -> Vec<CssRule> {
        semantic_stylesheet(tree, &self.config)
    }
}

impl Default for TokenEngine {
    fn default() -> Self {
        Self::new(TokenConfig::default())
    }
}

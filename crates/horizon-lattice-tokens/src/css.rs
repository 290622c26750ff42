//! CSS custom property output.
//!
//! Declarations are named with [`format_css_var`], the same rule the
//! reference resolver and [`TokenIndex`](crate::TokenIndex) use, so every
//! `var(--…)` a token value contains names a declaration.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::TokenConfig;
use crate::naming::format_css_var;
use crate::theme::SemanticTokenTree;
use crate::types::ParsedTokenSet;

/// A single `--name: value;` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssDeclaration {
    /// Custom property name, including the leading `--`.
    pub name: String,
    /// Property value.
    pub value: String,
}

impl CssDeclaration {
    /// Create a declaration.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for CssDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.name, self.value)
    }
}

/// A selector with its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    /// The selector, e.g. `:root`.
    pub selector: String,
    /// Declarations in emission order.
    pub declarations: Vec<CssDeclaration>,
}

impl fmt::Display for CssRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for declaration in &self.declarations {
            writeln!(f, "  {declaration}")?;
        }
        write!(f, "}}")
    }
}

/// One declaration per leaf of a parsed token set.
pub fn declarations(tokens: &ParsedTokenSet) -> Vec<CssDeclaration> {
    let mut declarations = vec![];
    tokens.for_each_leaf(|path, token| {
        declarations.push(CssDeclaration::new(format_css_var(path).var, token.value.as_str()));
    });
    declarations
}

/// Emit a parsed token set as one rule under `selector`.
pub fn token_stylesheet(tokens: &ParsedTokenSet, selector: &str) -> CssRule {
    CssRule {
        selector: selector.to_string(),
        declarations: declarations(tokens),
    }
}

/// Emit semantic tokens as one rule per theme.
///
/// Base theme values go under the root selector first, followed by every
/// other theme under its condition selector.
pub fn semantic_stylesheet(tree: &SemanticTokenTree, config: &TokenConfig) -> Vec<CssRule> {
    let mut by_key: BTreeMap<&str, Vec<CssDeclaration>> = BTreeMap::new();

    for (category, groups) in tree.iter() {
        for (sub_category, group) in groups {
            for (key, value) in &group.value {
                let name = format_css_var(&[category, sub_category.as_str()]).var;
                by_key.entry(key.as_str()).or_default().push(CssDeclaration::new(name, value.as_str()));
            }
            for (token, semantic) in &group.tokens {
                let name = format_css_var(&[category, sub_category.as_str(), token.as_str()]).var;
                for (key, value) in &semantic.value {
                    by_key
                        .entry(key.as_str())
                        .or_default()
                        .push(CssDeclaration::new(name.as_str(), value.as_str()));
                }
            }
        }
    }

    let keys = config.theme_keys();
    let mut rules = vec![];
    if let Some(declarations) = by_key.remove(keys.base()) {
        rules.push(CssRule {
            selector: config.selector_for(keys.base()),
            declarations,
        });
    }

    for (key, declarations) in by_key {
        let Some(theme) = keys.theme_for(key) else {
            tracing::warn!("theme key '{}' has no matching theme, skipping", key);
            continue;
        };
        rules.push(CssRule {
            selector: config.selector_for(theme),
            declarations,
        });
    }

    rules
}

/// Render rules as stylesheet text.
pub fn to_css(rules: &[CssRule]) -> String {
    rules
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

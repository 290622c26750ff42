//! Design token processing for Horizon Lattice.
//!
//! This crate turns authored design token dictionaries into resolved token
//! trees and CSS custom properties:
//!
//! - **References**: `$red-500` and `$space$100` rewritten to `var(--...)`
//! - **Categories**: hyphenated keys grouped into nested sub-categories
//! - **Aliases**: `space`, `spaceInset`, ... normalized to their `spacing` names
//! - **Themes**: per-theme token sets merged into one semantic tree
//! - **CSS Output**: custom properties per theme selector
//! - **Hot Reload**: Automatically reload token files during development
//!
//! # Example
//!
//! ```ignore
//! use horizon_lattice_tokens::prelude::*;
//!
//! // Parse one theme's tokens
//! let raw = RawDictionary::from_file("tokens/base.json")?;
//! let tokens = parse_tokens(&raw, &CategoryAliases::new());
//! assert_eq!(tokens.value_at("colors", ["danger"]), Some("var(--colors-red-500)"));
//!
//! // Merge every theme into semantic tokens
//! let engine = TokenEngine::default();
//! let semantic = engine.aggregate(&ThemeSet::from_dir("tokens/themes")?);
//! println!("{}", to_css(&engine.semantic_stylesheet(&semantic)));
//! ```

pub mod types;
pub mod alias;
pub mod reference;
pub mod builder;
pub mod parser;
pub mod theme;
pub mod config;
pub mod naming;
pub mod index;
pub mod css;
pub mod utilities;
pub mod engine;

#[cfg(feature = "hot-reload")]
pub mod hot_reload;

mod error;

pub use error::{Error, Result};
pub use index::TokenIndex;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::types::{RawDictionary, RawValue, Category, ParsedTokenSet, Token, TokenNode};
    pub use crate::alias::CategoryAliases;
    pub use crate::reference::{resolve_token, resolve_value};
    pub use crate::builder::build_category;
    pub use crate::parser::parse_tokens;
    pub use crate::theme::{SemanticTokenTree, SemanticGroup, SemanticToken, ThemeKeys, ThemeSet, aggregate};
    pub use crate::config::TokenConfig;
    pub use crate::naming::{format_css_var, format_token_name};
    pub use crate::index::TokenIndex;
    pub use crate::css::{CssRule, to_css};
    pub use crate::utilities::PropertyUtilities;
    pub use crate::engine::TokenEngine;
    pub use crate::{Error, Result};

    #[cfg(feature = "hot-reload")]
    pub use crate::hot_reload::TokenWatcher;
}

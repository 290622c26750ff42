//! Themes and cross-theme aggregation.

mod aggregate;
mod key;
mod set;

pub use aggregate::{SemanticGroup, SemanticToken, SemanticTokenTree, ThemeValues, aggregate, parse_themes};
pub use key::{DEFAULT_BASE_THEME, DEFAULT_THEME_PREFIX, ThemeKeys};
pub use set::{ThemeSet, theme_name_from_path};

//! Token-aware CSS shorthand properties.
//!
//! Shorthand properties accept bare token names per part, resolved against
//! the token category the property draws from:
//!
//! ```text
//! padding: "$100 $200"   =>  padding: "var(--spacing-100) var(--spacing-200)"
//! border:  "1px solid $gray-200"  =>  border: "1px solid var(--colors-gray-200)"
//! ```

use std::collections::HashMap;

use crate::index::TokenIndex;

/// Shorthand CSS properties and the token category each one reads from.
pub const CSS_PROPS_MAPPING: &[(&str, &str)] = &[
    ("background", "colors"),
    ("border", "colors"),
    ("borderBlock", "colors"),
    ("borderBlockEnd", "colors"),
    ("borderBlockStart", "colors"),
    ("borderBottom", "colors"),
    ("borderColor", "colors"),
    ("borderImage", "colors"),
    ("borderInline", "colors"),
    ("borderInlineEnd", "colors"),
    ("borderInlineStart", "colors"),
    ("borderLeft", "colors"),
    ("borderRadius", "radii"),
    ("borderRight", "colors"),
    ("borderTop", "colors"),
    ("borderWidth", "border-widths"),
    ("columnRule", "colors"),
    ("font", "fonts"),
    ("gap", "spacing"),
    ("grid", "spacing"),
    ("gridTemplate", "spacing"),
    ("inset", "spacing"),
    ("insetBlock", "spacing"),
    ("insetInline", "spacing"),
    ("margin", "spacing"),
    ("marginBlock", "spacing"),
    ("marginInline", "spacing"),
    ("outline", "colors"),
    ("padding", "spacing"),
    ("paddingBlock", "spacing"),
    ("paddingInline", "spacing"),
    ("scrollMargin", "spacing"),
    ("scrollMarginBlock", "spacing"),
    ("scrollMarginInline", "spacing"),
    ("scrollPadding", "spacing"),
    ("scrollPaddingBlock", "spacing"),
    ("scrollPaddingInline", "spacing"),
    ("textDecoration", "colors"),
    ("textEmphasis", "colors"),
];

/// Resolves token names inside shorthand property values.
#[derive(Debug, Clone)]
pub struct PropertyUtilities {
    categories: HashMap<String, String>,
}

impl PropertyUtilities {
    /// Create utilities for the default shorthand properties.
    pub fn new() -> Self {
        Self {
            categories: CSS_PROPS_MAPPING
                .iter()
                .map(|(prop, category)| (prop.to_string(), category.to_string()))
                .collect(),
        }
    }

    /// Map an extra property to a token category.
    pub fn with(mut self, prop: impl Into<String>, category: impl Into<String>) -> Self {
        self.categories.insert(prop.into(), category.into());
        self
    }

    /// Get the token category a property reads from.
    pub fn category_for(&self, prop: &str) -> Option<&str> {
        self.categories.get(prop).map(String::as_str)
    }

    /// Resolve the token names in a property value.
    ///
    /// Each space-separated part, with an optional leading `$` removed, is
    /// looked up as `$<category>-<part>`. Parts that are not tokens are kept
    /// as written. Returns `None` for properties without a token category.
    pub fn transform(&self, prop: &str, value: &str, index: &TokenIndex) -> Option<String> {
        let category = self.category_for(prop)?;

        let parts: Vec<&str> = value
            .split(' ')
            .map(|part| {
                let name = part.strip_prefix('$').unwrap_or(part);
                index
                    .get(&format!("${category}-{name}"))
                    .unwrap_or(name)
            })
            .collect();

        Some(parts.join(" "))
    }
}

impl Default for PropertyUtilities {
    fn default() -> Self {
        Self::new()
    }
}

//! Token set parser.
//!
//! Parses one theme's raw dictionary into a [`ParsedTokenSet`]:
//!
//! ```text
//! input                                   output
//! {                                       {
//!   colors: { "blue-100": "#00f" },         colors: { blue: { 100: { value: "#00f" } } },
//!   space: { "100": "8px" },                spacing: { 100: { value: "8px" } },
//!   spaceInset: { "100": "$space$100" },    spacingInset: { 100: { value: "var(--spacing-100)" } },
//! }                                       }
//! ```

use crate::alias::CategoryAliases;
use crate::builder::build_category;
use crate::types::{ParsedTokenSet, RawDictionary, RawValue};

/// Parse every category of a raw dictionary.
///
/// Category names are normalized before building, and the normalized name is
/// also the resolution context for the category's values. Categories whose
/// names normalize to the same canonical name are merged; on colliding leaf
/// paths the category that sorts last wins.
pub fn parse_tokens(raw: &RawDictionary, aliases: &CategoryAliases) -> ParsedTokenSet {
    let mut parsed = ParsedTokenSet::new();

    for (name, value) in raw.iter() {
        let category_name = aliases.normalize(name);

        let RawValue::Branch(tokens) = value else {
            tracing::warn!("top-level token '{}' is not a category, skipping", name);
            continue;
        };

        let category = build_category(category_name, tokens, aliases);
        tracing::debug!(
            "parsed category '{}' as '{}' ({} entries)",
            name,
            category_name,
            category.len()
        );

        if parsed.insert(category_name, category) {
            tracing::warn!(
                "category '{}' overwrote tokens already defined under '{}'",
                name,
                category_name
            );
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ParsedTokenSet {
        let raw: RawDictionary = serde_json::from_value(value).unwrap();
        parse_tokens(&raw, &CategoryAliases::new())
    }

    #[test]
    fn parses_hyphenated_colors() {
        let parsed = parse(json!({ "colors": { "blue-100": "#00f", "blue-200": "#0ff" } }));

        assert_eq!(
            serde_json::to_value(&parsed).unwrap(),
            json!({ "colors": { "blue": { "100": { "value": "#00f" }, "200": { "value": "#0ff" } } } })
        );
    }

    #[test]
    fn aliases_rename_categories_and_references() {
        let parsed = parse(json!({
            "space": { "100": "8px" },
            "spaceInset": { "100": "$space$100" },
        }));

        assert_eq!(parsed.value_at("spacing", ["100"]), Some("8px"));
        assert_eq!(parsed.value_at("spacingInset", ["100"]), Some("var(--spacing-100)"));
        assert!(parsed.get("space").is_none());
    }

    #[test]
    fn relative_references_use_normalized_category() {
        let parsed = parse(json!({ "space": { "200": "$100" } }));
        assert_eq!(parsed.value_at("spacing", ["200"]), Some("var(--spacing-100)"));
    }

    #[test]
    fn alias_and_canonical_names_build_the_same_tree() {
        let via_alias = parse(json!({ "space": { "small-1": "4px", "large": "$small-1" } }));
        let direct = parse(json!({ "spacing": { "small-1": "4px", "large": "$small-1" } }));
        assert_eq!(via_alias, direct);
    }

    #[test]
    fn aliased_categories_are_merged() {
        let parsed = parse(json!({
            "space": { "100": "8px", "200": "16px" },
            "spacing": { "200": "12px", "300": "24px" },
        }));

        let spacing = parsed.get("spacing").unwrap();
        assert_eq!(spacing.len(), 3);
        assert_eq!(spacing.value_at(["100"]), Some("8px"));
        assert_eq!(spacing.value_at(["200"]), Some("12px"));
        assert_eq!(spacing.value_at(["300"]), Some("24px"));
    }

    #[test]
    fn top_level_scalars_are_skipped() {
        let parsed = parse(json!({ "opacity": "0.5", "colors": { "white": "#fff" } }));
        assert_eq!(parsed.len(), 1);
        assert!(parsed.get("opacity").is_none());
    }

    #[test]
    fn empty_dictionary() {
        assert!(parse(json!({})).is_empty());
    }
}

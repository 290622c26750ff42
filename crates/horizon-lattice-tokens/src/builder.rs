//! Category tree builder.
//!
//! Turns one raw category into a nested tree:
//!
//! ```text
//! input (category "colors")        output
//! {                                {
//!   "blue-100": "#00f",              blue: {
//!   "blue-200": "#0ff",                100: { value: "#00f" },
//!   "white": "#fff",                   200: { value: "#0ff" },
//! }                                  },
//!                                    white: { value: "#fff" },
//!                                  }
//! ```
//!
//! A hyphenated key is always split at its first hyphen into a subcategory
//! and a leaf name. A plain key that names an existing subcategory (`gray`
//! next to `gray-100`) becomes that subcategory's own value. Values are
//! resolved in the context of the category being built, never the
//! subcategory.

use crate::alias::CategoryAliases;
use crate::reference::resolve_token;
use crate::types::{Category, RawDictionary, RawValue, TokenNode};

/// Split a key into `(subcategory, leaf)` at its first hyphen.
pub fn split_key(key: &str) -> Option<(&str, &str)> {
    key.split_once('-')
}

/// Build a category tree from a raw category.
pub fn build_category(category: &str, raw: &RawDictionary, aliases: &CategoryAliases) -> Category {
    let mut result = Category::new();

    for (key, value) in raw.iter() {
        let node = build_node(category, value, aliases);

        match split_key(key) {
            Some((sub_category, leaf)) => {
                result.insert(sub_category, Category::new().with(leaf, node));
            }
            None => {
                result.insert(key, node);
            }
        }
    }

    result
}

fn build_node(category: &str, value: &RawValue, aliases: &CategoryAliases) -> TokenNode {
    match value {
        RawValue::Leaf(raw) => TokenNode::Token(resolve_token(category, raw, aliases)),
        RawValue::Branch(nested) => TokenNode::Category(build_category(category, nested, aliases)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(category: &str, raw: RawDictionary) -> Category {
        build_category(category, &raw, &CategoryAliases::new())
    }

    #[test]
    fn hyphenated_keys_become_subcategories() {
        let colors = build(
            "colors",
            RawDictionary::new().with("blue-100", "#00f").with("blue-200", "#0ff"),
        );

        assert_eq!(colors.len(), 1);
        assert_eq!(colors.value_at(["blue", "100"]), Some("#00f"));
        assert_eq!(colors.value_at(["blue", "200"]), Some("#0ff"));
    }

    #[test]
    fn single_hyphenated_key_is_still_split() {
        let colors = build("colors", RawDictionary::new().with("blue-100", "#00f").with("white", "#fff"));
        assert_eq!(colors.value_at(["blue", "100"]), Some("#00f"));
        assert!(colors.get("blue-100").is_none());
        assert_eq!(colors.value_at(["white"]), Some("#fff"));
    }

    #[test]
    fn split_happens_at_first_hyphen() {
        assert_eq!(split_key("background-alpha-active"), Some(("background", "alpha-active")));
        assert_eq!(split_key("white"), None);

        let colors = build("colors", RawDictionary::new().with("background-alpha-active", "#eee"));
        assert_eq!(colors.value_at(["background", "alpha-active"]), Some("#eee"));
    }

    #[test]
    fn split_leaf_merges_into_existing_branch() {
        let colors = build(
            "colors",
            RawDictionary::new()
                .with("blue", RawDictionary::new().with("300", "#33f"))
                .with("blue-100", "#00f"),
        );

        assert_eq!(colors.value_at(["blue", "100"]), Some("#00f"));
        assert_eq!(colors.value_at(["blue", "300"]), Some("#33f"));
    }

    #[test]
    fn plain_key_beside_split_keys_is_kept() {
        let colors = build(
            "colors",
            RawDictionary::new().with("gray", "#888").with("gray-100", "#eee"),
        );

        assert_eq!(colors.value_at(["gray"]), Some("#888"));
        assert_eq!(colors.value_at(["gray", "100"]), Some("#eee"));

        let mut seen = vec![];
        colors.for_each_leaf(|path, token| seen.push((path.join("."), token.value.clone())));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn value_suffix_is_group_value() {
        let colors = build(
            "colors",
            RawDictionary::new().with("accent-value", "$blue-500").with("accent-muted", "#99f"),
        );

        let accent = colors.get("accent").and_then(TokenNode::as_category).unwrap();
        assert_eq!(accent.value(), Some("var(--colors-blue-500)"));
        assert!(accent.get("value").is_none());
        assert_eq!(accent.value_at(["muted"]), Some("#99f"));
    }

    #[test]
    fn nested_groups_are_built_recursively() {
        let typography = build(
            "typography",
            RawDictionary::new().with(
                "heading",
                RawDictionary::new().with("size", RawDictionary::new().with("lg", "32px")),
            ),
        );
        assert_eq!(typography.value_at(["heading", "size", "lg"]), Some("32px"));
    }

    #[test]
    fn leaves_resolve_against_calling_category() {
        let colors = build("colors", RawDictionary::new().with("text-primary", "$gray-900"));
        assert_eq!(colors.value_at(["text", "primary"]), Some("var(--colors-gray-900)"));

        let nested = build(
            "colors",
            RawDictionary::new().with("button", RawDictionary::new().with("bg", "$blue-500")),
        );
        assert_eq!(nested.value_at(["button", "bg"]), Some("var(--colors-blue-500)"));
    }

    #[test]
    fn group_under_hyphenated_key() {
        let colors = build(
            "colors",
            RawDictionary::new().with("blue-dark", RawDictionary::new().with("100", "#009")),
        );
        assert_eq!(colors.value_at(["blue", "dark", "100"]), Some("#009"));
    }

    #[test]
    fn key_order_does_not_matter() {
        let forward: RawDictionary = [("blue-100", "#00f"), ("blue-200", "#0ff"), ("red-100", "#f00")]
            .into_iter()
            .collect();
        let backward: RawDictionary = [("red-100", "#f00"), ("blue-200", "#0ff"), ("blue-100", "#00f")]
            .into_iter()
            .collect();

        assert_eq!(build("colors", forward), build("colors", backward));
    }
}

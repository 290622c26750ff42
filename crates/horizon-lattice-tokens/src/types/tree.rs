//! Resolved token trees.
//!
//! These are the shapes produced by the builder and the token set parser:
//! nested [`Category`] branches ending in [`Token`] leaves.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Key under which a branch carries its own value.
///
/// A token written as `gray` next to `gray-100` becomes the value of the
/// `gray` branch, and an authored `value` key (`accent-value`) means the
/// same thing. No child is ever stored under this key.
pub const VALUE_KEY: &str = "value";

/// A fully resolved token value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The value with every reference rewritten to `var(--…)`.
    pub value: String,
}

impl Token {
    /// Create a token.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A node in a category tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenNode {
    /// A resolved leaf.
    Token(Token),
    /// A nested branch.
    Category(Category),
}

impl TokenNode {
    /// Get the token, if this node is a leaf.
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            Self::Category(_) => None,
        }
    }

    /// Get the branch, if this node is a category.
    pub fn as_category(&self) -> Option<&Category> {
        match self {
            Self::Token(_) => None,
            Self::Category(category) => Some(category),
        }
    }

    /// Get the node's own value: the leaf value or the branch value.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Token(token) => Some(token.value.as_str()),
            Self::Category(category) => category.value(),
        }
    }
}

impl From<Token> for TokenNode {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl From<Category> for TokenNode {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}

/// A named branch of the token tree.
///
/// A branch may carry a value of its own besides its children; it is
/// serialized under [`VALUE_KEY`] next to them:
///
/// ```text
/// { "value": "#888", "100": { "value": "#eee" } }
/// ```
///
/// All mutation goes through [`Category::insert`] and [`Category::merge`],
/// which share one policy: when two writes land on the same key, the later
/// write wins, except that two branches are merged key by key and a token
/// meeting a branch becomes that branch's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    value: Option<Token>,
    nodes: BTreeMap<String, TokenNode>,
}

impl Category {
    /// Create an empty category.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, returning the category for chaining.
    pub fn with(mut self, key: impl Into<String>, node: impl Into<TokenNode>) -> Self {
        self.insert(key, node);
        self
    }

    /// Get the category's own value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_ref().map(|t| t.value.as_str())
    }

    /// Get the category's own value as a token.
    pub fn token(&self) -> Option<&Token> {
        self.value.as_ref()
    }

    /// Set the category's own value.
    ///
    /// Returns `true` if a previous value was overwritten.
    pub fn set_value(&mut self, token: Token) -> bool {
        match self.value.replace(token) {
            Some(previous) => {
                tracing::warn!(
                    "group value '{}' defined more than once; keeping the last definition",
                    previous.value
                );
                true
            }
            None => false,
        }
    }

    /// Get a direct child.
    pub fn get(&self, key: &str) -> Option<&TokenNode> {
        self.nodes.get(key)
    }

    /// Follow a path of keys from this category.
    pub fn lookup<'a, I>(&self, path: I) -> Option<&TokenNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut path = path.into_iter();
        let mut node = self.nodes.get(path.next()?)?;
        for key in path {
            node = node.as_category()?.nodes.get(key)?;
        }
        Some(node)
    }

    /// Get the resolved value at a path.
    ///
    /// A path ending at a branch yields the branch's own value, if any.
    pub fn value_at<'a, I>(&self, path: I) -> Option<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.lookup(path)?.value()
    }

    /// Insert a node, merging with an existing branch under the same key.
    ///
    /// A token inserted under [`VALUE_KEY`] sets this category's own value,
    /// and a branch inserted there is merged into this category.
    ///
    /// Returns `true` if a previous value was overwritten.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<TokenNode>) -> bool {
        let key = key.into();
        let incoming = node.into();

        if key == VALUE_KEY {
            return match incoming {
                TokenNode::Token(token) => self.set_value(token),
                TokenNode::Category(category) => self.merge(category),
            };
        }

        let Some(existing) = self.nodes.get_mut(&key) else {
            self.nodes.insert(key, incoming);
            return false;
        };

        match existing {
            TokenNode::Category(category) => match incoming {
                TokenNode::Category(incoming) => category.merge(incoming),
                TokenNode::Token(token) => category.set_value(token),
            },
            TokenNode::Token(token) => match incoming {
                TokenNode::Token(incoming) => {
                    tracing::warn!("token '{}' defined more than once; keeping the last definition", key);
                    *token = incoming;
                    true
                }
                TokenNode::Category(mut incoming) => {
                    let previous = std::mem::take(token);
                    let overwritten = match incoming.value {
                        Some(_) => {
                            tracing::warn!("token '{}' defined more than once; keeping the last definition", key);
                            true
                        }
                        None => {
                            incoming.value = Some(previous);
                            false
                        }
                    };
                    *existing = TokenNode::Category(incoming);
                    overwritten
                }
            },
        }
    }

    /// Merge another category into this one.
    ///
    /// Returns `true` if any value was overwritten.
    pub fn merge(&mut self, other: Category) -> bool {
        let mut overwritten = match other.value {
            Some(token) => self.set_value(token),
            None => false,
        };
        for (key, node) in other.nodes {
            overwritten |= self.insert(key, node);
        }
        overwritten
    }

    /// Iterate over direct children in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenNode)> {
        self.nodes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Visit every value with its full path relative to this category.
    ///
    /// A branch's own value is visited under the branch's path, before its
    /// children; this category's own value has the empty path.
    pub fn for_each_leaf<'a>(&'a self, mut f: impl FnMut(&[&'a str], &'a Token)) {
        let mut path = Vec::new();
        self.walk_leaves(&mut path, &mut f);
    }

    fn walk_leaves<'a>(&'a self, path: &mut Vec<&'a str>, f: &mut impl FnMut(&[&'a str], &'a Token)) {
        if let Some(token) = &self.value {
            f(path.as_slice(), token);
        }
        for (key, node) in &self.nodes {
            path.push(key.as_str());
            match node {
                TokenNode::Token(token) => f(path.as_slice(), token),
                TokenNode::Category(category) => category.walk_leaves(path, f),
            }
            path.pop();
        }
    }

    /// Get the number of direct children.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the category has neither children nor a value.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.value.is_none()
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.nodes.len() + usize::from(self.value.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(token) = &self.value {
            map.serialize_entry(VALUE_KEY, &token.value)?;
        }
        for (key, node) in &self.nodes {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

/// One theme's parsed tokens: normalized category name to category tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParsedTokenSet {
    categories: BTreeMap<String, Category>,
}

impl ParsedTokenSet {
    /// Create an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category, merging with an existing one of the same name.
    pub fn insert(&mut self, name: impl Into<String>, category: Category) -> bool {
        let name = name.into();
        match self.categories.get_mut(&name) {
            Some(existing) => existing.merge(category),
            None => {
                self.categories.insert(name, category);
                false
            }
        }
    }

    /// Get a category by its normalized name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Get the resolved value at `category` followed by `path`.
    pub fn value_at<'a, I>(&self, category: &str, path: I) -> Option<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.categories.get(category)?.value_at(path)
    }

    /// Iterate over categories in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Visit every leaf with its full path, category name first.
    pub fn for_each_leaf<'a>(&'a self, mut f: impl FnMut(&[&'a str], &'a Token)) {
        for (name, category) in &self.categories {
            category.for_each_leaf(|path, token| {
                let mut full = Vec::with_capacity(path.len() + 1);
                full.push(name.as_str());
                full.extend_from_slice(path);
                f(full.as_slice(), token);
            });
        }
    }

    /// Get the number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: &str) -> TokenNode {
        TokenNode::Token(Token::new(value))
    }

    #[test]
    fn insert_merges_branches() {
        let mut blue = Category::new();
        blue.insert("100", leaf("#00f"));

        let mut more_blue = Category::new();
        more_blue.insert("200", leaf("#0ff"));

        let mut colors = Category::new();
        assert!(!colors.insert("blue", blue));
        assert!(!colors.insert("blue", more_blue));

        assert_eq!(colors.value_at(["blue", "100"]), Some("#00f"));
        assert_eq!(colors.value_at(["blue", "200"]), Some("#0ff"));
    }

    #[test]
    fn insert_last_write_wins_on_leaves() {
        let mut colors = Category::new();
        colors.insert("danger", leaf("#f00"));
        assert!(colors.insert("danger", leaf("#900")));
        assert_eq!(colors.value_at(["danger"]), Some("#900"));
    }

    #[test]
    fn token_then_branch_keeps_both() {
        let mut colors = Category::new();
        assert!(!colors.insert("gray", leaf("#888")));
        assert!(!colors.insert("gray", Category::new().with("100", leaf("#eee"))));

        let gray = colors.get("gray").unwrap().as_category().unwrap();
        assert_eq!(gray.value(), Some("#888"));
        assert_eq!(colors.value_at(["gray"]), Some("#888"));
        assert_eq!(colors.value_at(["gray", "100"]), Some("#eee"));
    }

    #[test]
    fn branch_then_token_keeps_both() {
        let mut colors = Category::new();
        colors.insert("gray", Category::new().with("100", leaf("#eee")));
        assert!(!colors.insert("gray", leaf("#888")));

        assert_eq!(colors.value_at(["gray"]), Some("#888"));
        assert_eq!(colors.value_at(["gray", "100"]), Some("#eee"));
    }

    #[test]
    fn value_key_sets_own_value() {
        let mut accent = Category::new();
        assert!(!accent.insert(VALUE_KEY, leaf("#00f")));
        assert!(accent.get(VALUE_KEY).is_none());
        assert_eq!(accent.value(), Some("#00f"));
        assert_eq!(accent.len(), 0);
        assert!(!accent.is_empty());

        assert!(accent.insert(VALUE_KEY, leaf("#009")));
        assert_eq!(accent.value(), Some("#009"));
    }

    #[test]
    fn merge_carries_own_value() {
        let mut gray = Category::new().with("100", leaf("#eee"));
        assert!(!gray.merge(Category::new().with(VALUE_KEY, leaf("#888"))));
        assert_eq!(gray.value(), Some("#888"));
        assert_eq!(gray.value_at(["100"]), Some("#eee"));
    }

    #[test]
    fn for_each_leaf_reports_full_paths() {
        let mut set = ParsedTokenSet::new();
        let mut colors = Category::new();
        colors.insert("blue", Category::new().with("100", leaf("#00f")));
        colors.insert("gray", leaf("#888"));
        colors.insert("gray", Category::new().with("100", leaf("#eee")));
        colors.insert("white", leaf("#fff"));
        set.insert("colors", colors);

        let mut seen = Vec::new();
        set.for_each_leaf(|path, token| seen.push((path.join("."), token.value.clone())));

        assert_eq!(
            seen,
            vec![
                ("colors.blue.100".to_string(), "#00f".to_string()),
                ("colors.gray".to_string(), "#888".to_string()),
                ("colors.gray.100".to_string(), "#eee".to_string()),
                ("colors.white".to_string(), "#fff".to_string()),
            ]
        );
    }

    #[test]
    fn serializes_as_nested_value_objects() {
        let colors = Category::new()
            .with("blue", Category::new().with("100", leaf("#00f")))
            .with("gray", leaf("#888"))
            .with("gray", Category::new().with("100", leaf("#eee")));
        let mut set = ParsedTokenSet::new();
        set.insert("colors", colors);

        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "colors": {
                    "blue": { "100": { "value": "#00f" } },
                    "gray": { "value": "#888", "100": { "value": "#eee" } }
                }
            })
        );
    }
}

//! Raw, human-authored token dictionaries.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{Error, Result};

/// A single authored entry: either a scalar value or a nested group.
///
/// Scalars may embed references such as `$colors$blue-100`. Numbers and
/// booleans are accepted when loading and kept in their display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// A scalar token value.
    Leaf(String),
    /// A nested group of entries.
    Branch(RawDictionary),
}

impl RawValue {
    /// Create a leaf value.
    pub fn leaf(value: impl Into<String>) -> Self {
        Self::Leaf(value.into())
    }

    /// Check if this value is a nested group.
    pub fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(_))
    }

    /// Get the scalar value, if this is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Branch(_) => None,
        }
    }

    /// Get the nested group, if this is a branch.
    pub fn as_branch(&self) -> Option<&RawDictionary> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(dict) => Some(dict),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Leaf(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Leaf(value)
    }
}

impl From<RawDictionary> for RawValue {
    fn from(dict: RawDictionary) -> Self {
        Self::Branch(dict)
    }
}

/// A raw token dictionary as authored for one theme.
///
/// Entries are kept ordered by key so every pass over a dictionary is
/// deterministic regardless of the order the source file used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDictionary {
    entries: BTreeMap<String, RawValue>,
}

impl RawDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, returning the dictionary for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an entry, returning the previous value under the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Option<RawValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Get an entry.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries.get(key)
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a dictionary from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a dictionary from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a dictionary from a `.json` or `.toml` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = TokenFormat::from_path(path).ok_or_else(|| Error::unsupported_format(path))?;
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        match format {
            TokenFormat::Json => Self::from_json(&content),
            TokenFormat::Toml => Self::from_toml(&content),
        }
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for RawDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Supported token file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenFormat {
    Json,
    Toml,
}

impl TokenFormat {
    pub(crate) fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            RawValue::Leaf(value) => serializer.serialize_str(value),
            RawValue::Branch(dict) => dict.serialize(serializer),
        }
    }
}

impl Serialize for RawDictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct RawValueVisitor;

impl<'de> Visitor<'de> for RawValueVisitor {
    type Value = RawValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a token value (string, number, boolean) or a token group")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<RawValue, E> {
        Ok(RawValue::Leaf(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<RawValue, E> {
        Ok(RawValue::Leaf(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<RawValue, E> {
        Ok(RawValue::Leaf(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<RawValue, E> {
        Ok(RawValue::Leaf(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<RawValue, E> {
        Ok(RawValue::Leaf(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<RawValue, E> {
        Ok(RawValue::Leaf(v.to_string()))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<RawValue, A::Error> {
        RawDictionaryVisitor.visit_map(map).map(RawValue::Branch)
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(RawValueVisitor)
    }
}

struct RawDictionaryVisitor;

impl<'de> Visitor<'de> for RawDictionaryVisitor {
    type Value = RawDictionary;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of token names to token values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<RawDictionary, A::Error> {
        let mut dict = RawDictionary::new();
        while let Some((key, value)) = map.next_entry::<String, RawValue>()? {
            dict.entries.insert(key, value);
        }
        Ok(dict)
    }
}

impl<'de> Deserialize<'de> for RawDictionary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(RawDictionaryVisitor)
    }
}

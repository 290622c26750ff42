//! Collections of named themes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::types::{RawDictionary, TokenFormat};
use crate::{Error, Result};

/// Raw token dictionaries keyed by theme name.
///
/// Themes loaded from files remember their source path so they can be
/// reloaded when the file changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeSet {
    themes: BTreeMap<String, RawDictionary>,
    sources: BTreeMap<String, PathBuf>,
}

impl ThemeSet {
    /// Create an empty theme set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a theme, returning the set for chaining.
    pub fn with(mut self, name: impl Into<String>, tokens: RawDictionary) -> Self {
        self.insert(name, tokens);
        self
    }

    /// Add or replace a theme.
    pub fn insert(&mut self, name: impl Into<String>, tokens: RawDictionary) -> Option<RawDictionary> {
        self.themes.insert(name.into(), tokens)
    }

    /// Remove a theme.
    pub fn remove(&mut self, name: &str) -> Option<RawDictionary> {
        self.sources.remove(name);
        self.themes.remove(name)
    }

    /// Get a theme's raw tokens.
    pub fn get(&self, name: &str) -> Option<&RawDictionary> {
        self.themes.get(name)
    }

    /// Check if a theme exists.
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Iterate over themes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawDictionary)> {
        self.themes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over theme names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Get the file a theme was loaded from.
    pub fn source_path(&self, name: &str) -> Option<&Path> {
        self.sources.get(name).map(PathBuf::as_path)
    }

    /// Get the number of themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Load every `.json` and `.toml` file in a directory.
    ///
    /// Each file becomes one theme named after its file stem, so
    /// `themes/dark.json` is the `dark` theme. Other files are ignored.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

        let mut paths = vec![];
        for entry in entries {
            let path = entry.map_err(|e| Error::io(dir, e))?.path();
            if path.is_file() && TokenFormat::from_path(&path).is_some() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut set = Self::new();
        for path in paths {
            set.load_file(&path)?;
        }

        tracing::debug!("loaded {} themes from {}", set.len(), dir.display());
        Ok(set)
    }

    /// Load (or reload) a theme from a file, returning the theme name.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let name = theme_name_from_path(path).ok_or_else(|| Error::unsupported_format(path))?;
        let tokens = RawDictionary::from_file(path)?;

        self.themes.insert(name.clone(), tokens);
        self.sources.insert(name.clone(), path.to_path_buf());
        Ok(name)
    }

    /// Remove the theme that was loaded from `path`, returning its name.
    pub fn remove_file(&mut self, path: &Path) -> Option<String> {
        let name = self
            .sources
            .iter()
            .find(|(_, source)| same_file(source, path))
            .map(|(name, _)| name.clone())?;

        self.remove(&name);
        Some(name)
    }
}

impl FromIterator<(String, RawDictionary)> for ThemeSet {
    fn from_iter<I: IntoIterator<Item = (String, RawDictionary)>>(iter: I) -> Self {
        Self {
            themes: iter.into_iter().collect(),
            sources: BTreeMap::new(),
        }
    }
}

/// Compare two paths to a possibly deleted file.
///
/// Watchers report canonical paths while sources keep the path they were
/// loaded with, and a deleted file can no longer be canonicalized itself.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    if a.file_name() != b.file_name() {
        return false;
    }
    match (a.parent(), b.parent()) {
        (Some(pa), Some(pb)) => match (pa.canonicalize(), pb.canonicalize()) {
            (Ok(pa), Ok(pb)) => pa == pb,
            _ => false,
        },
        _ => false,
    }
}

/// Derive a theme name from a token file path.
pub fn theme_name_from_path(path: &Path) -> Option<String> {
    Some(path.file_stem()?.to_str()?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn theme_names_come_from_file_stems() {
        assert_eq!(theme_name_from_path(Path::new("themes/dark.json")).as_deref(), Some("dark"));
        assert_eq!(theme_name_from_path(Path::new("base.toml")).as_deref(), Some("base"));
    }

    #[test]
    fn load_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("base.json"), r##"{ "colors": { "danger": "#f00" } }"##).unwrap();
        fs::write(dir.path().join("dark.toml"), "[colors]\ndanger = \"#900\"\n").unwrap();
        fs::write(dir.path().join("README.md"), "not tokens").unwrap();

        let set = ThemeSet::from_dir(dir.path()).unwrap();
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["base", "dark"]);
        assert_eq!(set.source_path("dark"), Some(dir.path().join("dark.toml").as_path()));
    }

    #[test]
    fn load_directory_reports_malformed_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("base.json"), "{ not json").unwrap();

        let err = ThemeSet::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn missing_directory_is_io_error() {
        let err = ThemeSet::from_dir("/definitely/not/a/theme/dir").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn remove_by_source_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dark.json");
        fs::write(&path, r#"{ "colors": {} }"#).unwrap();

        let mut set = ThemeSet::new();
        assert_eq!(set.load_file(&path).unwrap(), "dark");
        assert_eq!(set.remove_file(&path).as_deref(), Some("dark"));
        assert!(set.is_empty());
        assert!(set.source_path("dark").is_none());
    }
}

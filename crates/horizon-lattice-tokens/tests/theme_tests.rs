//! Theme aggregation and output tests.

use std::fs;

use horizon_lattice_tokens::prelude::*;
use serde_json::json;
use tempfile::tempdir;

fn raw(value: serde_json::Value) -> RawDictionary {
    serde_json::from_value(value).expect("valid raw dictionary")
}

fn base_and_dark() -> ThemeSet {
    ThemeSet::new()
        .with("base", raw(json!({ "colors": { "danger": "#f00" } })))
        .with("dark", raw(json!({ "colors": { "danger": "#900" } })))
}

#[test]
fn test_aggregate_keys_values_by_theme() {
    let tree = aggregate(&base_and_dark(), &ThemeKeys::default(), &CategoryAliases::new());

    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({ "colors": { "danger": { "value": { "base": "#f00", "_dark": "#900" } } } })
    );
}

#[test]
fn test_aggregate_nested_tokens() {
    let themes = ThemeSet::new()
        .with("base", raw(json!({ "colors": { "text-primary": "#111", "text-muted": "#666" } })))
        .with("dark", raw(json!({ "colors": { "text-primary": "#eee" } })));

    let tree = aggregate(&themes, &ThemeKeys::default(), &CategoryAliases::new());

    assert_eq!(tree.token_value("colors", "text", "primary", "base"), Some("#111"));
    assert_eq!(tree.token_value("colors", "text", "primary", "_dark"), Some("#eee"));
    assert_eq!(tree.token_value("colors", "text", "muted", "base"), Some("#666"));
    assert_eq!(tree.token_value("colors", "text", "muted", "_dark"), None);
}

#[test]
fn test_aggregate_resolves_references_per_theme() {
    let themes = ThemeSet::new()
        .with("base", raw(json!({ "colors": { "danger": "$red-500" } })))
        .with("dark", raw(json!({ "colors": { "danger": "$red-300" } })));

    let tree = aggregate(&themes, &ThemeKeys::default(), &CategoryAliases::new());

    assert_eq!(tree.value("colors", "danger", "base"), Some("var(--colors-red-500)"));
    assert_eq!(tree.value("colors", "danger", "_dark"), Some("var(--colors-red-300)"));
}

#[test]
fn test_aggregate_normalizes_aliases_across_themes() {
    let themes = ThemeSet::new()
        .with("base", raw(json!({ "space": { "md": "16px" } })))
        .with("compact", raw(json!({ "spacing": { "md": "12px" } })));

    let tree = aggregate(&themes, &ThemeKeys::default(), &CategoryAliases::new());

    assert_eq!(tree.value("spacing", "md", "base"), Some("16px"));
    assert_eq!(tree.value("spacing", "md", "_compact"), Some("12px"));
}

#[test]
fn test_empty_theme_set() {
    let tree = aggregate(&ThemeSet::new(), &ThemeKeys::default(), &CategoryAliases::new());
    assert!(tree.is_empty());
}

#[test]
fn test_engine_with_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("tokens.toml");
    fs::write(
        &config_path,
        r#"
base_theme = "light"
theme_prefix = "_"

[aliases]
color = "colors"

[conditions]
dark = "[data-theme=dark]"
"#,
    )
    .unwrap();

    let themes_dir = dir.path().join("themes");
    fs::create_dir(&themes_dir).unwrap();
    fs::write(
        themes_dir.join("light.json"),
        r##"{ "color": { "danger": "#f00" } }"##,
    )
    .unwrap();
    fs::write(themes_dir.join("dark.toml"), "[color]\ndanger = \"#900\"\n").unwrap();

    let engine = TokenEngine::new(TokenConfig::from_file(&config_path).unwrap());
    let themes = ThemeSet::from_dir(&themes_dir).unwrap();
    let tree = engine.aggregate(&themes);

    assert_eq!(tree.value("colors", "danger", "light"), Some("#f00"));
    assert_eq!(tree.value("colors", "danger", "_dark"), Some("#900"));

    let css = to_css(&engine.semantic_stylesheet(&tree));
    assert_eq!(
        css,
        ":root {\n  --colors-danger: #f00;\n}\n\n[data-theme=dark] {\n  --colors-danger: #900;\n}"
    );
}

#[test]
fn test_missing_config_file() {
    let err = TokenConfig::from_file("/definitely/not/tokens.toml").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_unsupported_token_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("base.yaml");
    fs::write(&path, "colors: {}").unwrap();

    let err = RawDictionary::from_file(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
}

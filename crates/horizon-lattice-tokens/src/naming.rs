//! Token and CSS variable naming.
//!
//! A token path such as `["spacingInset", "100"]` has two names:
//!
//! - the lookup name `$spacing-inset-100`, dasherized for authoring
//!   (see [`format_token_name`]),
//! - the CSS variable `--spacingInset-100`, the path joined as written
//!   (see [`format_css_var`]). This is the name every resolved reference
//!   points at, so declarations and references always agree.

use std::sync::LazyLock;

use regex::Regex;

static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z0-9])").expect("valid case boundary pattern"));

const NEGATIVE_SPACING_PREFIX: &str = "spacing--";

/// A CSS custom property name and its reference form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssVar {
    /// The property name, e.g. `--colors-blue-100`.
    pub var: String,
    /// The reference, e.g. `var(--colors-blue-100)`.
    pub reference: String,
}

/// Join a path with hyphens, split camelCase and letter-digit boundaries,
/// and lowercase the result.
pub fn dasherize<S: AsRef<str>>(path: &[S]) -> String {
    let joined = path.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("-");
    CASE_BOUNDARY.replace_all(&joined, "$1-$2").to_lowercase()
}

/// Format the lookup name of a token.
///
/// Negative spacing tokens (`spacing.-100`) are named `-$spacing-100`.
pub fn format_token_name<S: AsRef<str>>(path: &[S]) -> String {
    let dasherized = dasherize(path);
    match dasherized.strip_prefix(NEGATIVE_SPACING_PREFIX) {
        Some(rest) => format!("-$spacing-{rest}"),
        None => format!("${dasherized}"),
    }
}

/// Format the CSS custom property for a token path.
///
/// Segments are joined with `-` and keep their case.
pub fn format_css_var<S: AsRef<str>>(path: &[S]) -> CssVar {
    let joined = path.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("-");
    let var = format!("--{joined}");
    let reference = format!("var({var})");
    CssVar { var, reference }
}

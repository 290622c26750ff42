//! Rewriting token references into CSS variable references.
//!
//! ```text
//! input (category "colors")      output
//! $colors$blue-100               var(--colors-blue-100)
//! $blue-100                      var(--colors-blue-100)
//! $space$100                     var(--spacing-100)
//! 1px solid $colors$gray-200     1px solid var(--colors-gray-200)
//! ```

use super::tokenizer::{Fragment, Reference, split_segments, tokenize};
use crate::alias::CategoryAliases;
use crate::naming::format_css_var;
use crate::types::Token;

/// Join a category and its path into a canonical `var(--…)` reference.
pub fn canonical_reference<'a, I>(category: &'a str, path: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut segments = vec![category];
    segments.extend(path);
    format_css_var(&segments).reference
}

/// Rewrite a single reference found in a token of `category`.
///
/// Returns `None` when the reference has no usable segments, in which case
/// the caller keeps the source text.
pub fn rewrite_reference(
    reference: &Reference<'_>,
    category: &str,
    aliases: &CategoryAliases,
) -> Option<String> {
    let segments = if reference.is_qualified() {
        reference.segments.clone()
    } else {
        let mut qualified = split_segments(category);
        qualified.extend_from_slice(&reference.segments);
        qualified
    };

    let (name, path) = segments.split_first()?;
    Some(canonical_reference(
        aliases.normalize(name),
        path.iter().copied(),
    ))
}

/// Resolve every reference in a raw value belonging to `category`.
///
/// Text outside references is copied through unchanged; a value without
/// references comes back as-is.
pub fn resolve_value(category: &str, raw: &str, aliases: &CategoryAliases) -> String {
    let mut resolved = String::with_capacity(raw.len());

    for fragment in tokenize(raw) {
        match fragment {
            Fragment::Literal(text) => resolved.push_str(text),
            Fragment::Reference(reference) => match rewrite_reference(&reference, category, aliases) {
                Some(rewritten) => resolved.push_str(&rewritten),
                None => {
                    tracing::debug!("reference '{}' has no segments, kept literally", reference.source);
                    resolved.push_str(reference.source);
                }
            },
        }
    }

    resolved
}

/// Resolve a raw value into a [`Token`].
pub fn resolve_token(category: &str, raw: &str, aliases: &CategoryAliases) -> Token {
    Token::new(resolve_value(category, raw, aliases))
}

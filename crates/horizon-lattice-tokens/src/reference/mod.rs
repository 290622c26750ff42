//! Token reference parsing and resolution.

mod resolver;
mod tokenizer;

pub use resolver::{canonical_reference, resolve_token, resolve_value, rewrite_reference};
pub use tokenizer::{Fragment, MARKER, Reference, SEGMENT_SEPARATOR, split_segments, tokenize};

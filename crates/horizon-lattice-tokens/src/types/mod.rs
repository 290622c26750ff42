//! Token data types.

mod raw;
mod tree;

pub(crate) use raw::TokenFormat;
pub use raw::{RawDictionary, RawValue};
pub use tree::{Category, ParsedTokenSet, Token, TokenNode, VALUE_KEY};

//! Reference tokenizer.
//!
//! Splits a raw token value into literal text and `$`-prefixed references.
//! A reference is one or more repetitions of `$` followed by at least one
//! name character (ASCII alphanumerics, `_`, `.` or `-`):
//!
//! ```text
//! 1px solid $colors$blue-100
//! ^^^^^^^^^^ literal
//!           ^^^^^^^^^^^^^^^^ reference { marker_count: 2, segments: [colors, blue, 100] }
//! ```
//!
//! A `$` that is not followed by a name character stays literal.

/// The reference marker.
pub const MARKER: char = '$';

/// Separator between path segments inside a reference.
pub const SEGMENT_SEPARATOR: char = '-';

/// A piece of a tokenized value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Text outside any reference, kept as-is.
    Literal(&'a str),
    /// A token reference.
    Reference(Reference<'a>),
}

/// A parsed token reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<'a> {
    /// The matched source text, markers included.
    pub source: &'a str,
    /// Number of `$` markers in the match.
    pub marker_count: usize,
    /// Non-empty pieces between markers and hyphens.
    pub segments: Vec<&'a str>,
}

impl<'a> Reference<'a> {
    /// Parse a matched reference.
    fn new(source: &'a str) -> Self {
        Self {
            source,
            marker_count: source.matches(MARKER).count(),
            segments: split_segments(source),
        }
    }

    /// Whether the reference names its own category (`$colors$blue-100`).
    ///
    /// A single-marker reference (`$blue-100`) is relative to the category
    /// of the token that contains it.
    pub fn is_qualified(&self) -> bool {
        self.marker_count > 1
    }
}

/// Split text on markers and hyphens, dropping empty pieces.
pub fn split_segments(text: &str) -> Vec<&str> {
    text.split([MARKER, SEGMENT_SEPARATOR])
        .filter(|s| !s.is_empty())
        .collect()
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'.' || b == b'-'
}

/// Whether a reference starts at byte offset `at`.
fn starts_reference(bytes: &[u8], at: usize) -> bool {
    bytes[at] == MARKER as u8 && bytes.get(at + 1).copied().is_some_and(is_name_byte)
}

/// Split a raw value into literal and reference fragments.
pub fn tokenize(input: &str) -> Vec<Fragment<'_>> {
    let bytes = input.as_bytes();
    let mut fragments = vec![];
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if !starts_reference(bytes, pos) {
            pos += 1;
            continue;
        }

        let start = pos;
        loop {
            // Skip the marker, then consume the name run.
            pos += 1;
            while pos < bytes.len() && is_name_byte(bytes[pos]) {
                pos += 1;
            }
            if pos >= bytes.len() || !starts_reference(bytes, pos) {
                break;
            }
        }

        if literal_start < start {
            fragments.push(Fragment::Literal(&input[literal_start..start]));
        }
        fragments.push(Fragment::Reference(Reference::new(&input[start..pos])));
        literal_start = pos;
    }

    if literal_start < bytes.len() {
        fragments.push(Fragment::Literal(&input[literal_start..]));
    }

    fragments
}

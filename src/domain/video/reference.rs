//! Video reference value object

use std::fmt;

/// Value object for one raw, user-supplied video link.
/// Holds the exact text between commas, whitespace included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference(String);

impl VideoReference {
    /// Wrap a raw link string
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Split a free-text link list on commas.
    /// Each piece is kept verbatim: `"a, b"` yields `["a", " b"]`, and empty
    /// pieces fail extraction like any other bad reference.
    pub fn split_list(input: &str) -> Vec<VideoReference> {
        input.split(',').map(VideoReference::new).collect()
    }

    /// Get the raw reference text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

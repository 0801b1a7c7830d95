//! Video identifier value object

use std::fmt;

use crate::domain::error::InvalidReferenceError;

use super::reference::VideoReference;

/// Marker preceding the id in long-form watch URLs
const WATCH_MARKER: &str = "v=";

/// Marker preceding the id in short links
const SHORT_LINK_MARKER: &str = "youtu.be/";

/// Value object for a video identifier in the transcript service's namespace.
/// Derived deterministically from a [`VideoReference`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Wrap an identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Extract the identifier from a reference.
    ///
    /// Everything after the first `v=` (or, failing that, `youtu.be/`) is
    /// taken verbatim, so `watch?v=abc&t=30s` yields `abc&t=30s` with the
    /// extra parameters attached — the watch endpoint tolerates them. A
    /// reference ending exactly at a marker yields an empty id, which fails
    /// at fetch time rather than here.
    pub fn extract(reference: &VideoReference) -> Result<VideoId, InvalidReferenceError> {
        let raw = reference.as_str();

        if let Some((_, id)) = raw.split_once(WATCH_MARKER) {
            return Ok(VideoId::new(id));
        }

        if let Some((_, id)) = raw.split_once(SHORT_LINK_MARKER) {
            return Ok(VideoId::new(id));
        }

        Err(InvalidReferenceError {
            reference: raw.to_string(),
        })
    }

    /// Get the identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when extraction produced an empty identifier
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Combined transcript accumulator

use std::fmt;

use super::text::TranscriptText;

/// Separator appended before each transcript
const SEPARATOR: &str = "\n\n";

/// Accumulated transcript text across all requested videos, in input order.
/// Every push appends a blank-line separator followed by the transcript, so a
/// non-empty result always begins with one blank line; zero pushes leave the
/// value empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedTranscript(String);

impl CombinedTranscript {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a separator and one video's transcript
    pub fn push(&mut self, transcript: &TranscriptText) {
        self.0.push_str(SEPARATOR);
        self.0.push_str(transcript.as_str());
    }

    /// Get the accumulated text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when nothing has been pushed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume and return the accumulated text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CombinedTranscript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

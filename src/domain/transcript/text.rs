//! Per-video transcript text value object

use std::fmt;

use super::segment::TranscriptSegment;

/// Value object for one video's transcript: segment texts joined with single
/// spaces. Segment boundaries are lost; no punctuation or newline is inserted
/// between segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptText(String);

impl TranscriptText {
    /// Wrap an already-joined transcript string
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Join segment texts with single spaces, in order
    pub fn from_segments(segments: &[TranscriptSegment]) -> Self {
        let joined = segments
            .iter()
            .map(TranscriptSegment::text)
            .collect::<Vec<_>>()
            .join(" ");
        Self(joined)
    }

    /// Get the transcript text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no segment text was present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TranscriptText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_segments_joins_with_single_spaces() {
        let segments = vec![
            TranscriptSegment::new("Hello", 0.0, 1.0),
            TranscriptSegment::new("world", 1.0, 1.0),
        ];
        assert_eq!(TranscriptText::from_segments(&segments).as_str(), "Hello world");
    }

    #[test]
    fn from_segments_inserts_no_punctuation() {
        let segments = vec![
            TranscriptSegment::new("First sentence.", 0.0, 2.0),
            TranscriptSegment::new("Second sentence.", 2.0, 2.0),
        ];
        assert_eq!(
            TranscriptText::from_segments(&segments).as_str(),
            "First sentence. Second sentence."
        );
    }

    #[test]
    fn from_empty_segments_is_empty() {
        assert!(TranscriptText::from_segments(&[]).is_empty());
    }

    #[test]
    fn single_segment_is_verbatim() {
        let segments = vec![TranscriptSegment::new("only one", 0.0, 1.0)];
        assert_eq!(TranscriptText::from_segments(&segments).as_str(), "only one");
    }
}

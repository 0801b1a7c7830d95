//! Transcript segment value object

/// One timestamped unit of spoken text from the transcript service.
/// `start` and `duration` are seconds; they are carried through parsing but
/// not used beyond it.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    text: String,
    start: f64,
    duration: f64,
}

impl TranscriptSegment {
    /// Create a segment
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }

    /// Get the spoken text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the start offset in seconds
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Get the duration in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_holds_fields() {
        let seg = TranscriptSegment::new("Hello", 1.5, 2.0);
        assert_eq!(seg.text(), "Hello");
        assert_eq!(seg.start(), 1.5);
        assert_eq!(seg.duration(), 2.0);
    }
}

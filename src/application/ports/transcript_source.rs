//! Transcript retrieval port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcript::{TranscriptSegment, TranscriptText};
use crate::domain::video::VideoId;

/// Transcript retrieval errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptError {
    #[error("Video is unavailable")]
    VideoUnavailable,

    #[error("No captions are available for this video")]
    CaptionsUnavailable,

    #[error("No transcript found for languages [{requested}]. Available: [{available}]")]
    LanguageNotFound {
        requested: String,
        available: String,
    },

    #[error("Transcript is empty")]
    EmptyTranscript,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse transcript data: {0}")]
    ParseError(String),
}

/// Port for fetching video transcripts
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the caption segments for a video, in playback order.
    ///
    /// # Arguments
    /// * `video` - The id of the video to fetch captions for
    ///
    /// # Returns
    /// The ordered segments or an error
    async fn fetch_segments(
        &self,
        video: &VideoId,
    ) -> Result<Vec<TranscriptSegment>, TranscriptError>;

    /// Fetch a video's transcript as a single text, with segments joined
    /// by single spaces.
    async fn fetch_transcript(&self, video: &VideoId) -> Result<TranscriptText, TranscriptError> {
        let segments = self.fetch_segments(video).await?;
        Ok(TranscriptText::from_segments(&segments))
    }
}

//! Script generation port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::script::ScriptPrompt;
use crate::domain::transcript::CombinedTranscript;

/// Script generation errors
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for turning transcripts into scripts
#[async_trait]
pub trait ScriptGenerator: Send + Sync {
    /// Generate a script from the combined transcript text.
    ///
    /// # Arguments
    /// * `prompt` - The instruction prefixed to the transcript
    /// * `transcript` - The combined transcript of all videos
    ///
    /// # Returns
    /// The generated script text or an error
    async fn generate(
        &self,
        prompt: &ScriptPrompt,
        transcript: &CombinedTranscript,
    ) -> Result<String, GenerationError>;
}

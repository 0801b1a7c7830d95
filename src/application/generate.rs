//! Script generation use case

use thiserror::Error;

use crate::domain::error::InvalidReferenceError;
use crate::domain::script::ScriptPrompt;
use crate::domain::transcript::{CombinedTranscript, TranscriptText};
use crate::domain::video::{VideoId, VideoReference};

use super::ports::{GenerationError, ScriptGenerator, TranscriptError, TranscriptSource};

/// Errors from the generate use case
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Script generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Missing API key. Set GEMINI_API_KEY or configure via 'tube-scribe config set api_key <key>'")]
    MissingApiKey,
}

/// Why a single video yielded no transcript
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("{0}")]
    InvalidReference(#[from] InvalidReferenceError),

    #[error("{0}")]
    Transcript(#[from] TranscriptError),
}

/// Per-video result of the transcript collection phase.
/// Outcomes are reported in input order, failures included.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// The reference as the user supplied it
    pub reference: VideoReference,
    /// The transcript text, or why it could not be fetched
    pub result: Result<TranscriptText, FetchError>,
}

/// Input parameters for the generate use case
#[derive(Debug, Clone)]
pub struct GenerateInput {
    /// Video references in the order the user supplied them
    pub references: Vec<VideoReference>,
}

/// Output from the generate use case
#[derive(Debug, Clone)]
pub enum GenerateOutput {
    /// A script was generated from at least one transcript
    Script {
        script: String,
        outcomes: Vec<FetchOutcome>,
    },
    /// No video yielded a transcript, so generation was skipped
    NoTranscripts { outcomes: Vec<FetchOutcome> },
}

/// Callbacks for progress and status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct GenerateCallbacks {
    /// Called before each video's transcript fetch
    pub on_fetch_start: Option<Box<dyn Fn(&VideoReference) + Send + Sync>>,
    /// Called after each video's transcript fetch, success or failure
    pub on_fetch_done: Option<Box<dyn Fn(&FetchOutcome) + Send + Sync>>,
    /// Called when script generation starts, with (fetched, total) counts
    pub on_generate_start: Option<Box<dyn Fn(usize, usize) + Send + Sync>>,
}

/// One-shot script generation use case
pub struct GenerateScriptUseCase<S, G>
where
    S: TranscriptSource,
    G: ScriptGenerator,
{
    source: S,
    generator: G,
}

impl<S, G> GenerateScriptUseCase<S, G>
where
    S: TranscriptSource,
    G: ScriptGenerator,
{
    /// Create a new use case instance
    pub fn new(source: S, generator: G) -> Self {
        Self { source, generator }
    }

    /// Execute the generation workflow
    pub async fn execute(
        &self,
        input: GenerateInput,
        callbacks: GenerateCallbacks,
    ) -> Result<GenerateOutput, GenerateError> {
        let (combined, outcomes) = self
            .collect_transcripts(&input.references, &callbacks)
            .await;

        if combined.is_empty() {
            return Ok(GenerateOutput::NoTranscripts { outcomes });
        }

        if let Some(ref cb) = callbacks.on_generate_start {
            let fetched = outcomes.iter().filter(|o| o.result.is_ok()).count();
            cb(fetched, outcomes.len());
        }

        let prompt = ScriptPrompt::fixed();
        let script = self.generator.generate(&prompt, &combined).await?;

        Ok(GenerateOutput::Script { script, outcomes })
    }

    /// Fetch transcripts one by one, in input order.
    ///
    /// A video that fails never aborts the run: its outcome records the
    /// error and collection moves on to the next reference. Successful
    /// transcripts are appended to the combined text in the same order.
    async fn collect_transcripts(
        &self,
        references: &[VideoReference],
        callbacks: &GenerateCallbacks,
    ) -> (CombinedTranscript, Vec<FetchOutcome>) {
        let mut combined = CombinedTranscript::new();
        let mut outcomes = Vec::with_capacity(references.len());

        for reference in references {
            if let Some(ref cb) = callbacks.on_fetch_start {
                cb(reference);
            }

            let result = match VideoId::extract(reference) {
                Ok(video) => self
                    .source
                    .fetch_transcript(&video)
                    .await
                    .map_err(FetchError::from),
                Err(e) => Err(FetchError::from(e)),
            };

            if let Ok(ref text) = result {
                combined.push(text);
            }

            let outcome = FetchOutcome {
                reference: reference.clone(),
                result,
            };

            if let Some(ref cb) = callbacks.on_fetch_done {
                cb(&outcome);
            }

            outcomes.push(outcome);
        }

        (combined, outcomes)
    }
}

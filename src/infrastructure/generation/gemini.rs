//! Gemini API script generator adapter

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationError, ScriptGenerator};
use crate::domain::config::DEFAULT_MODEL;
use crate::domain::script::ScriptPrompt;
use crate::domain::transcript::CombinedTranscript;

/// Gemini API base URL
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// generateContent wire types. Field names follow the JSON schema.

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

impl GenerateContentRequest {
    /// Single user turn holding the whole prompt text
    fn user_text(text: String) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    parts: Option<Vec<TextPart>>,
}

#[derive(Debug, Deserialize)]
struct TextPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Gemini API script generator
pub struct GeminiGenerator {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiGenerator {
    /// Generator against the public API with the default model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Generator against the public API with an explicit model
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Generator against a custom endpoint instead of the public Gemini
    /// API. Used by tests against a local server.
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    /// One user turn: the instruction followed by the combined transcript
    fn build_request(
        &self,
        prompt: &ScriptPrompt,
        transcript: &CombinedTranscript,
    ) -> GenerateContentRequest {
        GenerateContentRequest::user_text(prompt.request_text(transcript))
    }

    /// Text of the first candidate, parts concatenated
    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        let first = response.candidates.as_ref()?.first()?;
        let parts = first.content.as_ref()?.parts.as_ref()?;

        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.is_empty()).then_some(text)
    }
}

#[async_trait]
impl ScriptGenerator for GeminiGenerator {
    async fn generate(
        &self,
        prompt: &ScriptPrompt,
        transcript: &CombinedTranscript,
    ) -> Result<String, GenerationError> {
        let body = self.build_request(prompt, transcript);

        let response = self
            .client
            .post(self.api_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => return Err(GenerationError::InvalidApiKey),
            StatusCode::TOO_MANY_REQUESTS => return Err(GenerationError::RateLimited),
            status if !status.is_success() => {
                let detail = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(GenerationError::ApiError(format!(
                    "HTTP {}: {}",
                    status, detail
                )));
            }
            _ => {}
        }

        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::ParseError(e.to_string()))?;

        // The API reports some failures inside a 200 body
        if let Some(error) = response.error {
            return Err(GenerationError::ApiError(error.message));
        }

        let text = Self::extract_text(&response).ok_or(GenerationError::EmptyResponse)?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(trimmed.to_string())
    }
}

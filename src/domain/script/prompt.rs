//! Script prompt value object

use crate::domain::transcript::CombinedTranscript;

/// Fixed instruction prefix for every generation request
const INSTRUCTION: &str = "You are a YouTube Script Generator. You will be taking the transcript text and writing a cohesive script based on the following content: ";

/// Value object for the generation prompt. The instruction never varies; the
/// combined transcript is appended verbatim as the request suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptPrompt {
    content: String,
}

impl ScriptPrompt {
    /// The fixed script-generation instruction
    pub fn fixed() -> Self {
        Self {
            content: INSTRUCTION.to_string(),
        }
    }

    /// Get the instruction text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Build the full request text: instruction followed by the transcript,
    /// unmodified
    pub fn request_text(&self, transcript: &CombinedTranscript) -> String {
        format!("{}{}", self.content, transcript.as_str())
    }
}

impl Default for ScriptPrompt {
    fn default() -> Self {
        Self::fixed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transcript::TranscriptText;

    #[test]
    fn fixed_contains_instruction() {
        let prompt = ScriptPrompt::fixed();
        assert!(prompt.content().contains("YouTube Script Generator"));
        assert!(prompt.content().contains("cohesive script"));
    }

    #[test]
    fn request_text_appends_transcript_verbatim() {
        let prompt = ScriptPrompt::fixed();
        let mut combined = CombinedTranscript::new();
        combined.push(&TranscriptText::new("Hi there"));
        combined.push(&TranscriptText::new("Foo bar"));

        let text = prompt.request_text(&combined);
        assert!(text.starts_with(prompt.content()));
        assert!(text.ends_with("\n\nHi there\n\nFoo bar"));
        assert_eq!(text.len(), prompt.content().len() + combined.as_str().len());
    }

    #[test]
    fn request_text_with_empty_transcript_is_instruction_only() {
        let prompt = ScriptPrompt::fixed();
        let text = prompt.request_text(&CombinedTranscript::new());
        assert_eq!(text, prompt.content());
    }

    #[test]
    fn default_is_fixed() {
        assert_eq!(ScriptPrompt::default(), ScriptPrompt::fixed());
    }
}

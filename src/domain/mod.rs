//! Domain layer
//!
//! Value objects and errors for video references, transcripts, and the
//! generation prompt. Nothing here performs I/O.

pub mod config;
pub mod error;
pub mod script;
pub mod transcript;
pub mod video;
pub use config::AppConfig;
pub use error::*;
pub use script::ScriptPrompt;
pub use transcript::{CombinedTranscript, TranscriptSegment, TranscriptText};
pub use video::{VideoId, VideoReference};

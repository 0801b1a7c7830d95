//! Ports the application depends on
//!
//! Infrastructure adapters implement these traits, keeping the use case
//! free of HTTP and filesystem details.

pub mod config;
pub mod script_generator;
pub mod transcript_source;

pub use config::ConfigStore;
pub use script_generator::{GenerationError, ScriptGenerator};
pub use transcript_source::{TranscriptError, TranscriptSource};

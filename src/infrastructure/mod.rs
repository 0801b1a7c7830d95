//! Infrastructure layer
//!
//! Adapters that implement the application ports against real systems:
//! YouTube watch pages, the Gemini API, and the config file.

pub mod config;
pub mod generation;
pub mod transcript;
pub use config::XdgConfigStore;
pub use generation::GeminiGenerator;
pub use transcript::YouTubeTranscriptClient;

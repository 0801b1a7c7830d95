//! Transcript retrieval adapters

mod youtube;

pub use youtube::YouTubeTranscriptClient;

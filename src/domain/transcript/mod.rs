//! Transcript domain module

mod combined;
mod segment;
mod text;

pub use combined::CombinedTranscript;
pub use segment::TranscriptSegment;
pub use text::TranscriptText;

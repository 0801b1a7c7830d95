//! TubeScribe - YouTube transcript to script generation CLI
//!
//! Collects the transcripts of one or more YouTube videos and turns them
//! into a single cohesive script with Google Gemini.
//!
//! # Architecture
//!
//! Hexagonal (ports and adapters) layout, dependencies pointing inward:
//!
//! - **Domain**: value objects and errors, no I/O
//! - **Application**: the generation use case and its ports
//! - **Infrastructure**: YouTube, Gemini, and config-file adapters
//! - **CLI**: argument parsing, presentation, exit codes

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

//! Domain error types

use thiserror::Error;

/// Error when a video reference contains no recognizable identifier marker
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid YouTube URL format: \"{reference}\". Expected a watch?v= or youtu.be/ link")]
pub struct InvalidReferenceError {
    pub reference: String,
}

/// Error when reading, writing, or validating configuration
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Could not read config file: {0}")]
    ReadError(String),

    #[error("Config file is not valid TOML: {0}")]
    ParseError(String),

    #[error("Could not write config file: {0}")]
    WriteError(String),

    #[error("Invalid value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

//! Application layer
//!
//! The script generation use case and the ports it drives.

pub mod generate;
pub mod ports;
pub use generate::{
    FetchError, FetchOutcome, GenerateCallbacks, GenerateError, GenerateInput, GenerateOutput,
    GenerateScriptUseCase,
};

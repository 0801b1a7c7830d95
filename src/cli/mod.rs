//! Command-line layer
//!
//! Argument parsing, terminal presentation, and the runners that wire
//! adapters into the use case.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

pub use app::{run_generate, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, GenerateOptions};
pub use presenter::Presenter;

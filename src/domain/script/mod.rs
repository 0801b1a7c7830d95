//! Script generation domain module

mod prompt;

pub use prompt::ScriptPrompt;

//! Terminal presentation helpers
//!
//! Status lines and the spinner go to stderr; stdout carries only payload
//! text (the generated script, config values), so the script stays
//! pipeable.

use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Formats CLI status output and owns the active spinner, if any
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner on stderr with the given message.
    /// indicatif hides it when stderr is not a terminal.
    pub fn start_spinner(&mut self, message: &str) {
        let style = ProgressStyle::default_spinner()
            .tick_chars(TICK_CHARS)
            .template("{spinner:.cyan} {msg}")
            .unwrap();

        let spinner = ProgressBar::new_spinner().with_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(TICK_INTERVAL);
        self.spinner = Some(spinner);
    }

    /// Clone of the active spinner, for message updates from callbacks.
    /// ProgressBar clones share the underlying state.
    pub fn spinner(&self) -> Option<ProgressBar> {
        self.spinner.clone()
    }

    /// Finish the spinner, leaving a success line
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Finish the spinner, leaving a failure line
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Clear the spinner without leaving a status line
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Payload text on stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Key-value line on stdout, for config listings
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// One-line summary of the transcript collection phase
    pub fn collection_summary(fetched: usize, total: usize) -> String {
        format!(
            "Fetched {} of {} transcript{}",
            fetched,
            total,
            if total == 1 { "" } else { "s" }
        )
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

//! One-shot generation runner

use std::env;
use std::path::Path;
use std::process::ExitCode;

use colored::*;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::application::{
    FetchOutcome, GenerateCallbacks, GenerateInput, GenerateOutput, GenerateScriptUseCase,
};
use crate::domain::config::AppConfig;
use crate::domain::video::VideoReference;
use crate::infrastructure::{GeminiGenerator, XdgConfigStore, YouTubeTranscriptClient};

use super::args::GenerateOptions;
use super::presenter::Presenter;

// Process exit codes. Usage errors exit with 2, which clap reports itself.
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the one-shot script generation
pub async fn run_generate(options: GenerateOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let api_key = match get_api_key().await {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if options.references.is_empty() {
        presenter.info("Please enter YouTube video links to generate a script.");
        return ExitCode::from(EXIT_SUCCESS);
    }

    let source = YouTubeTranscriptClient::new(options.languages.clone());
    let generator = GeminiGenerator::with_model(api_key, &options.model);
    let use_case = GenerateScriptUseCase::new(source, generator);

    let input = GenerateInput {
        references: options.references.clone(),
    };

    presenter.start_spinner("Fetching transcripts...");

    // Spinner updates ride on ProgressBar clones; error lines go through
    // plain stderr so they stay visible when output is piped.
    let fetch_spinner = presenter.spinner();
    let generate_spinner = presenter.spinner();

    let callbacks = GenerateCallbacks {
        on_fetch_start: Some(Box::new(move |reference: &VideoReference| {
            if let Some(ref spinner) = fetch_spinner {
                spinner.set_message(format!("Fetching transcript for {}...", reference));
            }
        })),
        on_fetch_done: Some(Box::new(|outcome: &FetchOutcome| {
            if let Err(ref e) = outcome.result {
                eprintln!(
                    "{} Error extracting transcript for {}: {}",
                    "✗".red(),
                    outcome.reference,
                    e
                );
            }
        })),
        on_generate_start: Some(Box::new(move |fetched: usize, total: usize| {
            eprintln!(
                "{} {}",
                "✓".green(),
                Presenter::collection_summary(fetched, total)
            );
            if let Some(ref spinner) = generate_spinner {
                spinner.set_message("Generating script...".to_string());
            }
        })),
    };

    match use_case.execute(input, callbacks).await {
        Ok(GenerateOutput::Script { script, .. }) => {
            presenter.spinner_success("Script generated");

            // The script always prints, even when also saved to a file
            presenter.output(&script);

            if let Some(ref path) = options.output {
                if let Err(e) = save_script(path, &script).await {
                    presenter.error(&format!(
                        "Failed to save script to {}: {}",
                        path.display(),
                        e
                    ));
                    return ExitCode::from(EXIT_ERROR);
                }
                presenter.success(&format!("Script saved to {}", path.display()));
            }

            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(GenerateOutput::NoTranscripts { .. }) => {
            presenter.stop_spinner();
            presenter.warn("No transcripts were found for the provided links.");
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => {
            presenter.spinner_fail("Script generation failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Write the script to a file.
/// The file holds the exact script text; the trailing newline stdout gets
/// from printing is not added here.
async fn save_script(path: &Path, script: &str) -> std::io::Result<()> {
    fs::write(path, script).await
}

/// API key from the environment, falling back to the config file
pub async fn get_api_key() -> Result<String, String> {
    if let Ok(key) = env::var("GEMINI_API_KEY") {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    let store = XdgConfigStore::new();
    let config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    config.api_key.ok_or_else(|| {
        "Missing API key. Set GEMINI_API_KEY environment variable or run 'tube-scribe config set api_key <key>'".to_string()
    })
}

/// Resolve the effective configuration by layering every source
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    let env_config = AppConfig {
        api_key: env::var("GEMINI_API_KEY").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Precedence, lowest to highest: defaults, file, environment, flags
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

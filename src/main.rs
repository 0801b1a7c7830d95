//! TubeScribe CLI entry point

use std::process::ExitCode;

use clap::Parser;

use tube_scribe::cli::{
    app::{load_merged_config, run_generate, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    GenerateOptions,
};
use tube_scribe::domain::config::AppConfig;
use tube_scribe::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Config subcommands run and exit without touching the generation path
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Flags become the top config layer; the key never comes from flags
    let cli_config = AppConfig {
        api_key: None,
        model: cli.model.clone(),
        languages: cli.languages.clone(),
    };

    let config = load_merged_config(cli_config).await;

    let options = GenerateOptions {
        references: cli.references(),
        output: cli.output.clone(),
        model: config.model_or_default(),
        languages: config.languages_or_default(),
    };

    run_generate(options).await
}

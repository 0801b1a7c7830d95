//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::video::VideoReference;

/// Default filename for --output when no path is given
pub const DEFAULT_SCRIPT_FILENAME: &str = "script.txt";

/// TubeScribe - YouTube transcripts to scripts
#[derive(Parser, Debug)]
#[command(name = "tube-scribe")]
#[command(version)]
#[command(about = "Turn YouTube video transcripts into a cohesive script using Google Gemini")]
#[command(long_about = None)]
pub struct Cli {
    /// YouTube links, comma-separated or as separate arguments
    #[arg(value_name = "LINKS")]
    pub links: Vec<String>,

    /// Save the generated script to a file (default: script.txt)
    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_SCRIPT_FILENAME
    )]
    pub output: Option<PathBuf>,

    /// Gemini model to use
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Preferred transcript languages (comma-separated codes)
    #[arg(short = 'l', long, value_name = "CODES")]
    pub languages: Option<String>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// All links as individual references.
    ///
    /// Arguments are joined with commas and re-split, so one
    /// comma-separated string and repeated arguments parse the same way.
    pub fn references(&self) -> Vec<VideoReference> {
        if self.links.is_empty() {
            return Vec::new();
        }
        VideoReference::split_list(&self.links.join(","))
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed generate options (oneshot mode)
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub references: Vec<VideoReference>,
    pub output: Option<PathBuf>,
    pub model: String,
    pub languages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn bare_invocation_has_no_options() {
        let cli = Cli::parse_from(["tube-scribe"]);
        assert!(cli.links.is_empty());
        assert!(cli.output.is_none());
        assert!(cli.model.is_none());
        assert!(cli.languages.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn references_empty_when_no_links() {
        let cli = Cli::parse_from(["tube-scribe"]);
        assert!(cli.references().is_empty());
    }

    #[test]
    fn cli_parses_comma_separated_links() {
        let cli = Cli::parse_from(["tube-scribe", "https://youtu.be/a,https://youtu.be/b"]);
        assert_eq!(cli.links.len(), 1);

        let refs = cli.references();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].as_str(), "https://youtu.be/a");
        assert_eq!(refs[1].as_str(), "https://youtu.be/b");
    }

    #[test]
    fn cli_parses_separate_link_arguments() {
        let cli = Cli::parse_from(["tube-scribe", "https://youtu.be/a", "https://youtu.be/b"]);
        assert_eq!(cli.links.len(), 2);
        assert_eq!(cli.references().len(), 2);
    }

    #[test]
    fn cli_parses_output_with_value() {
        let cli = Cli::parse_from(["tube-scribe", "https://youtu.be/a", "-o", "my-script.txt"]);
        assert_eq!(cli.output, Some(PathBuf::from("my-script.txt")));
    }

    #[test]
    fn cli_parses_output_without_value() {
        let cli = Cli::parse_from(["tube-scribe", "https://youtu.be/a", "-o"]);
        assert_eq!(cli.output, Some(PathBuf::from(DEFAULT_SCRIPT_FILENAME)));
    }

    #[test]
    fn cli_parses_model() {
        let cli = Cli::parse_from(["tube-scribe", "-m", "gemini-2.0-flash-lite"]);
        assert_eq!(cli.model, Some("gemini-2.0-flash-lite".to_string()));
    }

    #[test]
    fn cli_parses_languages() {
        let cli = Cli::parse_from(["tube-scribe", "-l", "es,en"]);
        assert_eq!(cli.languages, Some("es,en".to_string()));
    }

    #[test]
    fn config_init_parses_as_subcommand() {
        let cli = Cli::parse_from(["tube-scribe", "config", "init"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn config_set_carries_key_and_value() {
        let cli = Cli::parse_from(["tube-scribe", "config", "set", "model", "gemini-2.0-flash"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "model");
            assert_eq!(value, "gemini-2.0-flash");
        } else {
            panic!("Expected a config set subcommand");
        }
    }

    #[test]
    fn verify_cli() {
        // debug_assert panics on an inconsistent command definition
        Cli::command().debug_assert();
    }
}

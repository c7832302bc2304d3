//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tutor_core::config::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(name = "tutor")]
#[command(about = "AI Learning Guide tutor - ask about AI, ML, DL, NLP and GenAI")]
#[command(
    long_about = r#"AI Learning Guide tutor - ask about AI, ML, DL, NLP and GenAI

USAGE:
  tutor                          # Start an interactive chat
  tutor ask "what is a CNN?"     # Answer one question and exit
  tutor key set                  # Store your Gemini API key
  tutor config init              # Create a config file"#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (JSON, TOML or YAML)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// API key for this run only; takes precedence over the stored key
    #[arg(long, global = true, env = "TUTOR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Learner level used in prompts (e.g. Beginner, Intermediate, Advanced)
    #[arg(long, global = true)]
    pub level: Option<String>,

    /// Learner's recent average quiz score
    #[arg(long, global = true)]
    pub score: Option<f64>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Answer a single message and exit
    Ask {
        /// The question to ask
        message: String,

        /// Print the display events as JSON instead of rendering them
        #[arg(long)]
        json: bool,
    },

    /// Manage the stored API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum KeyAction {
    /// Store a key; prompts with hidden input when VALUE is omitted
    Set { value: Option<String> },
    /// Remove the stored key
    Clear,
    /// Show which key would be used and where it comes from
    Status,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Create a new configuration file with defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Display the effective configuration (keys redacted)
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_interactive() {
        let cli = Cli::try_parse_from(["tutor"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config_file, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn test_ask_with_global_flags() {
        let cli = Cli::try_parse_from([
            "tutor",
            "ask",
            "what is a CNN?",
            "--level",
            "Advanced",
            "--score",
            "88.5",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.level.as_deref(), Some("Advanced"));
        assert_eq!(cli.score, Some(88.5));
        match cli.command {
            Some(Commands::Ask { message, json }) => {
                assert_eq!(message, "what is a CNN?");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_key_set_value_is_optional() {
        let cli = Cli::try_parse_from(["tutor", "key", "set"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Key {
                action: KeyAction::Set { value: None }
            })
        ));
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::try_parse_from(["tutor", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init { force: true }
            })
        ));
    }
}

//! Tutor chat CLI
//!
//! Terminal front-end for the learning assistant.
//!
//! - `tutor`                 interactive chat (default)
//! - `tutor ask "<message>"` answer one message and exit
//! - `tutor key set|clear|status`
//! - `tutor config init|show`

mod args;
mod commands;
mod console;
mod logging;
mod router;
mod signal_handler;
mod sink;

use clap::Parser;
use tutor_core::config::load_config;

pub use args::{Cli, Commands, ConfigAction, KeyAction};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = load_config(&cli.config_file);
    let logging_config = loaded
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    logging::init(&logging_config, cli.verbose)?;

    router::route(cli, loaded).await?;
    Ok(())
}

//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands;
use tutor_core::TutorConfig;
use tutor_core::error::TutorResult;

/// Route CLI commands to their respective handlers.
///
/// `loaded` is the result of loading the configuration; only `config init`
/// runs without a valid one.
pub async fn route(cli: Cli, loaded: TutorResult<TutorConfig>) -> TutorResult<()> {
    match cli.command.clone() {
        Some(Commands::Config {
            action: ConfigAction::Init { force },
        }) => commands::config::init(&cli.config_file, force),
        Some(Commands::Config {
            action: ConfigAction::Show,
        }) => commands::config::show(&cli.config_file, &loaded?),
        Some(Commands::Key { action }) => commands::key::run(&cli, &loaded?, &action),
        Some(Commands::Ask { message, json }) => {
            commands::ask::run(&cli, &loaded?, &message, json).await
        }
        None => commands::interactive::run(&cli, &loaded?).await,
    }
}

//! CLI commands

pub mod ask;
pub mod config;
pub mod interactive;
pub mod key;

use crate::args::Cli;
use std::sync::Arc;
use tutor_core::context::{StaticContextProvider, UserContext};
use tutor_core::display::DisplaySink;
use tutor_core::error::TutorResult;
use tutor_core::{ChatSession, ChatSessionBuilder, TutorConfig};

/// Learner context from `--level` / `--score`, if either was given
pub fn context_from_args(cli: &Cli) -> Option<UserContext> {
    if cli.level.is_none() && cli.score.is_none() {
        return None;
    }
    Some(UserContext::new(
        cli.level.clone().unwrap_or_default(),
        cli.score,
    ))
}

/// Session wired from configuration and global flags
pub fn build_session(
    cli: &Cli,
    config: &TutorConfig,
    sink: Arc<dyn DisplaySink>,
) -> TutorResult<ChatSession> {
    Ok(ChatSessionBuilder::from_config(config, sink)?
        .credential_override(cli.api_key.clone())
        .context_provider(Arc::new(StaticContextProvider::new(context_from_args(cli))))
        .build())
}

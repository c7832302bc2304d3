//! One-shot question

use super::build_session;
use crate::args::Cli;
use crate::sink::ConsoleSink;
use std::sync::Arc;
use tutor_core::display::RecordingSink;
use tutor_core::error::{TutorError, TutorResult};
use tutor_core::{MessageOutcome, TutorConfig};

/// Answer one message; fails when the answer is an error message
pub async fn run(cli: &Cli, config: &TutorConfig, message: &str, json: bool) -> TutorResult<()> {
    let outcome = if json {
        let sink = Arc::new(RecordingSink::new());
        let session = build_session(cli, config, sink.clone())?;
        let outcome = session.handle_message(message).await;
        println!("{}", serde_json::to_string_pretty(&sink.events())?);
        outcome
    } else {
        let session = build_session(cli, config, Arc::new(ConsoleSink::new(false)))?;
        session.handle_message(message).await
    };

    match outcome {
        MessageOutcome::Failed(e) | MessageOutcome::Rejected(e) => Err(e),
        MessageOutcome::Cancelled => Err(TutorError::Cancelled),
        MessageOutcome::Ignored | MessageOutcome::Answered(_) => Ok(()),
    }
}

//! Interactive chat loop

use super::build_session;
use crate::args::Cli;
use crate::console::CliConsole;
use crate::signal_handler::SignalHandler;
use crate::sink::ConsoleSink;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tutor_core::error::TutorResult;
use tutor_core::{MessageOutcome, TutorConfig};

const HINT: &str = "Type a question. /key <value> stores your API key, /quit exits.";

/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Message(String),
    /// `/key <value>`; an empty value clears the stored key
    Key(String),
    Help,
    Quit,
}

pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed {
        "/quit" | "/exit" => Input::Quit,
        "/help" => Input::Help,
        _ => match trimmed.strip_prefix("/key") {
            Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
                Input::Key(rest.trim().to_string())
            }
            _ => Input::Message(line.to_string()),
        },
    }
}

pub async fn run(cli: &Cli, config: &TutorConfig) -> TutorResult<()> {
    let console = CliConsole::new(true);
    let sink = Arc::new(ConsoleSink::new(false));
    let session = build_session(cli, config, sink)?;

    let mut signals = SignalHandler::new();
    signals.start()?;

    session.open().await;
    console.info(HINT);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        console.prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_input(&line) {
            Input::Quit => break,
            Input::Help => console.info(HINT),
            Input::Key(value) => match session.store_credential(&value) {
                Ok(()) if value.is_empty() => console.success("Stored API key cleared"),
                Ok(()) => console.success("API key saved"),
                Err(e) => console.error(&format!("Could not store the API key: {e}")),
            },
            Input::Message(text) => {
                let token = signals.begin_message();
                let outcome = session.handle_message_until(&text, &token).await;
                signals.end_message();
                if outcome == MessageOutcome::Cancelled {
                    console.warn("Request cancelled.");
                }
            }
        }
    }

    signals.stop();
    println!("Goodbye! Happy learning!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_input("/quit"), Input::Quit);
        assert_eq!(parse_input("  /exit "), Input::Quit);
        assert_eq!(parse_input("/help"), Input::Help);
        assert_eq!(parse_input("/key  AIza-new "), Input::Key("AIza-new".into()));
        assert_eq!(parse_input("/key"), Input::Key(String::new()));
    }

    #[test]
    fn test_everything_else_is_a_message() {
        assert_eq!(
            parse_input("what is /key rotation?"),
            Input::Message("what is /key rotation?".into())
        );
        assert_eq!(parse_input("/keyboard"), Input::Message("/keyboard".into()));
        assert_eq!(parse_input("hi"), Input::Message("hi".into()));
    }
}

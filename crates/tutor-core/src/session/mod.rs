//! Chat session orchestration
//!
//! [`ChatSession`] runs one user message through the pipeline: quick reply,
//! credential, prompt, model sweep with backoff, and exactly one assistant
//! turn at the end.

mod builder;
mod chat;
mod guards;
mod outcome;


pub use builder::ChatSessionBuilder;
pub use chat::{ChatSession, WELCOME_MESSAGE};
pub use guards::InputGate;
pub use outcome::{MessageOutcome, Reply, ReplySource};

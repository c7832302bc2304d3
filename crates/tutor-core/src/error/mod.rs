//! Error types for the tutor chat core
//!
//! Every failure a user message can run into is a [`TutorError`]. The session
//! never lets one escape: it is rendered into exactly one chat message through
//! [`TutorError::user_message`].

mod conversions;
mod types;
mod user_messages;

pub use types::{TutorError, TutorResult};
pub use user_messages::ErrorCategory;

//! What happened to a submitted message

use crate::error::TutorError;
use crate::quick_response::QuickCategory;

/// Where a reply came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplySource {
    /// Answered locally, no network call
    Quick(QuickCategory),
    /// Answered by `model` during sweep number `sweeps`
    Model { model: String, sweeps: u32 },
}

/// A successful reply, already shown as an assistant turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

impl Reply {
    pub fn model(&self) -> Option<&str> {
        match &self.source {
            ReplySource::Model { model, .. } => Some(model),
            ReplySource::Quick(_) => None,
        }
    }
}

/// Result of [`ChatSession::handle_message`](super::ChatSession::handle_message)
#[derive(Debug, Clone, PartialEq)]
pub enum MessageOutcome {
    /// Blank input; nothing was shown
    Ignored,
    /// Another message was in flight; nothing was shown
    Rejected(TutorError),
    /// The reply was shown
    Answered(Reply),
    /// The error message was shown
    Failed(TutorError),
    /// Processing was abandoned before a final turn
    Cancelled,
}

impl MessageOutcome {
    pub fn reply(&self) -> Option<&Reply> {
        match self {
            Self::Answered(reply) => Some(reply),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&TutorError> {
        match self {
            Self::Rejected(e) | Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

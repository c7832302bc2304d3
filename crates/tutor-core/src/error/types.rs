//! Core error type for the tutor chat

use crate::llm::fallback::TransientReason;
use thiserror::Error;

/// Result type alias for tutor operations
pub type TutorResult<T> = Result<T, TutorError>;

/// Main error type for the tutor chat core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TutorError {
    /// No credential resolved to a non-empty value
    #[error("Configuration error: no API key available")]
    MissingCredential,

    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// The service rejected the request as malformed (400)
    #[error("Invalid request (status {status})")]
    InvalidRequest { status: u16 },

    /// The credential is not allowed to call the service (403)
    #[error("Permission denied (status {status})")]
    PermissionDenied { status: u16 },

    /// Every sweep was rate limited until the retry policy ran out
    #[error("Quota exhausted after {sweeps} sweeps")]
    QuotaExhausted { sweeps: u32 },

    /// Every model was unavailable or unreachable
    #[error("Service unavailable: {reason}")]
    ServiceUnavailable { reason: TransientReason },

    /// Successful status but no text in the reply
    #[error("Empty reply (status {status})")]
    EmptyReply { status: u16 },

    /// Any other status or an unexpected payload shape
    #[error("Unexpected response (status {status})")]
    Unknown { status: u16 },

    /// Another message of the same conversation is still in flight
    #[error("A message is already being processed")]
    Busy,

    /// Message processing was abandoned
    #[error("Message processing was cancelled")]
    Cancelled,

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// HTTP client errors outside the model sweep
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl TutorError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create an IO error bound to a path
    pub fn io_at(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// HTTP status code attached to the error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::InvalidRequest { status }
            | Self::PermissionDenied { status }
            | Self::EmptyReply { status }
            | Self::Unknown { status } => Some(*status),
            _ => None,
        }
    }
}

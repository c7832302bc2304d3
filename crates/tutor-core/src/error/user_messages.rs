//! Chat-facing error messages and classification

use super::types::TutorError;

/// Error category for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing key or bad configuration
    Configuration,
    /// Request rejected by the service
    InvalidRequest,
    /// Key lacks access to the service
    Permission,
    /// Rate limiting / quota exceeded
    RateLimit,
    /// Service or network unreachable
    Network,
    /// The service answered with something unusable
    Internal,
    /// Conversation state prevented processing
    UserInput,
    /// User-initiated cancellation
    Cancellation,
}

impl ErrorCategory {
    /// Get a user-friendly category name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Configuration => "Configuration Error",
            Self::InvalidRequest => "Invalid Request",
            Self::Permission => "Permission Error",
            Self::RateLimit => "Rate Limit Exceeded",
            Self::Network => "Network Error",
            Self::Internal => "Internal Error",
            Self::UserInput => "Invalid Input",
            Self::Cancellation => "Cancelled",
        }
    }
}

impl TutorError {
    /// Classify the error for presentation
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCredential | Self::Config { .. } => ErrorCategory::Configuration,
            Self::InvalidRequest { .. } => ErrorCategory::InvalidRequest,
            Self::PermissionDenied { .. } => ErrorCategory::Permission,
            Self::QuotaExhausted { .. } => ErrorCategory::RateLimit,
            Self::ServiceUnavailable { .. } | Self::Http { .. } => ErrorCategory::Network,
            Self::EmptyReply { .. } | Self::Unknown { .. } | Self::Io { .. } | Self::Json { .. } => {
                ErrorCategory::Internal
            }
            Self::Busy => ErrorCategory::UserInput,
            Self::Cancelled => ErrorCategory::Cancellation,
        }
    }

    /// The single chat message shown for this error
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredential => {
                "No API key found. Add your Gemini API key to enable AI responses.".to_string()
            }
            Self::Config { message, .. } => format!(
                "The assistant is not configured correctly: {}. Fix the configuration and try again.",
                message
            ),
            Self::InvalidRequest { .. } => {
                "Invalid request. Please check your API key in the settings.".to_string()
            }
            Self::PermissionDenied { .. } => "API key doesn't have permission. Make sure the \
                 Generative Language API is enabled in your Google Cloud project."
                .to_string(),
            Self::QuotaExhausted { .. } => "API quota exceeded. The free tier has daily limits. \
                 Please wait a few minutes or check your billing at Google AI Studio."
                .to_string(),
            Self::ServiceUnavailable { .. } | Self::Http { .. } => {
                "Could not reach the AI service. Please check your internet connection and try again."
                    .to_string()
            }
            Self::EmptyReply { .. } => {
                "I couldn't generate a response. Try rephrasing your question.".to_string()
            }
            Self::Unknown { status } => format!("Error ({}). Please try again.", status),
            Self::Busy => "Please wait for the current answer before sending another message."
                .to_string(),
            Self::Cancelled => "Request cancelled.".to_string(),
            Self::Io { .. } | Self::Json { .. } => {
                format!("Something went wrong ({}). Please try again.", self)
            }
        }
    }
}

//! Tutor Chat Core Library
//!
//! This crate orchestrates the learning-assistant chat: local quick replies,
//! prompt construction from the learner context, credential resolution, the
//! Gemini model fallback sweep with backoff on rate limits, and the display
//! intents a front-end renders.

pub mod config;
pub mod context;
pub mod credential;
pub mod display;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod quick_response;
pub mod recovery;
pub mod session;

// Re-export commonly used types
pub use config::{TutorConfig, load_config};
pub use context::{StaticContextProvider, UserContext, UserContextProvider};
pub use credential::{
    CredentialResolver, CredentialSource, CredentialStore, FileCredentialStore,
    MemoryCredentialStore, ResolvedCredential,
};
pub use display::{
    DisplayEvent, DisplaySink, IndicatorHandle, IndicatorStatus, RecordingSink, TurnRole,
};
pub use error::{ErrorCategory, TutorError, TutorResult};
pub use llm::{
    GeminiTransport, ModelChain, ModelFallbackClient, ModelTransport, SweepReport, SweepResult,
};
pub use prompt::PromptBuilder;
pub use quick_response::{QuickCategory, QuickResponse, QuickResponseMatcher};
pub use recovery::{RetryController, RetryDecision, RetryPolicy};
pub use session::{ChatSession, ChatSessionBuilder, MessageOutcome, Reply, ReplySource};

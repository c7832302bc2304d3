//! Generative model access
//!
//! `gemini` holds the wire format and HTTP transport of the `generateContent`
//! endpoint; `fallback` sweeps an ordered chain of models over that transport
//! and classifies every reply.

pub mod fallback;
pub mod gemini;

pub use fallback::{
    ModelAttempt, ModelChain, ModelFallbackClient, ModelOutcome, SweepReport, SweepResult,
    TerminalReason, TransientReason,
};
pub use gemini::{GeminiTransport, GenerateContentRequest, ModelTransport, RequestOptions};

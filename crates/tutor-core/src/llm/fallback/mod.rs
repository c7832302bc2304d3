//! Ordered model fallback
//!
//! A sweep tries every model of the chain in order and stops at the first
//! success or the first terminal failure. Rate limits, missing models and
//! network failures move on to the next model.

mod chain;
mod client;
mod types;

#[cfg(test)]
mod tests;

pub use chain::{DEFAULT_MODELS, ModelChain};
pub use client::{ModelFallbackClient, classify_reply};
pub use types::{
    ModelAttempt, ModelOutcome, SweepReport, SweepResult, TerminalReason, TransientReason,
};

//! Retry after fully rate-limited sweeps
//!
//! Only a sweep in which no model answered and at least one reported a rate
//! limit is retried. Every other sweep result is final.

mod backoff;
mod retry;

pub use backoff::{BackoffStrategy, LinearBackoff};
pub use retry::{RetryController, RetryDecision, RetryPolicy, RetryState};

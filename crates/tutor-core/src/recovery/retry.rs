//! Retry policy and per-message retry state

use super::backoff::{BackoffStrategy, LinearBackoff};
use crate::llm::fallback::SweepResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// How often and how patiently rate-limited sweeps are repeated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total sweeps per message, the first one included
    pub max_sweeps: u32,
    /// Wait before retry `n` (0-indexed) is `backoff_step * (n + 1)`
    #[serde(with = "humantime_serde")]
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_sweeps: 3,
            backoff_step: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_sweeps: u32, backoff_step: Duration) -> Self {
        Self {
            max_sweeps,
            backoff_step,
        }
    }

    pub fn backoff(&self) -> LinearBackoff {
        LinearBackoff::stepped(self.backoff_step)
    }

    /// Delay before retry `attempt` (0-indexed)
    pub fn delay_for_retry(&self, attempt: u32) -> Duration {
        self.backoff().delay_for_attempt(attempt)
    }
}

/// Number of sweeps run for the current message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryState {
    sweep_index: u32,
    max_sweeps: u32,
}

impl RetryState {
    pub fn new(max_sweeps: u32) -> Self {
        Self {
            sweep_index: 0,
            max_sweeps: max_sweeps.max(1),
        }
    }

    /// 0-indexed number of the sweep in progress
    pub fn sweep_index(&self) -> u32 {
        self.sweep_index
    }

    pub fn sweeps_run(&self) -> u32 {
        self.sweep_index + 1
    }

    pub fn can_retry(&self) -> bool {
        self.sweep_index + 1 < self.max_sweeps
    }
}

/// What to do after a sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    /// Wait `delay`, then run sweep `attempt + 1`
    Retry { attempt: u32, delay: Duration },
    /// Processing of the message ends with this result
    Finish(SweepResult),
}

/// Decides between retrying and finishing, one instance per message
#[derive(Debug, Clone)]
pub struct RetryController {
    backoff: LinearBackoff,
    state: RetryState,
}

impl RetryController {
    pub fn new(policy: &RetryPolicy) -> Self {
        Self {
            backoff: policy.backoff(),
            state: RetryState::new(policy.max_sweeps),
        }
    }

    pub fn state(&self) -> RetryState {
        self.state
    }

    /// Record a finished sweep and decide what happens next
    pub fn on_sweep(&mut self, result: SweepResult) -> RetryDecision {
        if !result.is_rate_limited() {
            debug!(sweeps = self.state.sweeps_run(), "sweep result is final");
            return RetryDecision::Finish(result);
        }
        if !self.state.can_retry() {
            info!(
                sweeps = self.state.sweeps_run(),
                "rate limited on every sweep, giving up"
            );
            return RetryDecision::Finish(result);
        }

        let attempt = self.state.sweep_index;
        let delay = self.backoff.delay_for_attempt(attempt);
        self.state.sweep_index += 1;
        info!(attempt, delay_secs = delay.as_secs(), "all models rate limited, backing off");
        RetryDecision::Retry { attempt, delay }
    }
}

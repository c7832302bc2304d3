//! Outcome types of a fallback sweep

use std::fmt;

/// Failure that moves the sweep on to the next model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransientReason {
    /// HTTP 429
    RateLimited,
    /// HTTP 404, the model is unknown or retired
    Unavailable,
    /// The exchange did not complete
    NetworkError,
}

impl fmt::Display for TransientReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate limited"),
            Self::Unavailable => write!(f, "unavailable"),
            Self::NetworkError => write!(f, "network error"),
        }
    }
}

/// Failure that ends the sweep immediately
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalReason {
    /// HTTP 400
    BadRequest,
    /// HTTP 403
    Forbidden,
    /// Successful status without any reply text
    EmptyResponse,
    /// Any other status, or a successful status with an unreadable body
    Other,
}

impl fmt::Display for TerminalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => write!(f, "bad request"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::EmptyResponse => write!(f, "empty response"),
            Self::Other => write!(f, "unexpected response"),
        }
    }
}

/// Classification of a single model call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOutcome {
    Success { text: String },
    Transient(TransientReason),
    Terminal { reason: TerminalReason, status: u16 },
}

/// Record of one model call within a sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAttempt {
    pub model: String,
    pub outcome: ModelOutcome,
}

/// Aggregate outcome of one pass over the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepResult {
    Success {
        model: String,
        text: String,
    },
    Terminal {
        model: String,
        reason: TerminalReason,
        status: u16,
    },
    /// At least one model was rate limited and none succeeded
    AllRateLimited,
    /// No model was rate limited and none succeeded
    AllUnavailable { last: TransientReason },
}

impl SweepResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::AllRateLimited)
    }
}

/// Sweep result plus the per-model trail that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    pub result: SweepResult,
    pub attempts: Vec<ModelAttempt>,
}

impl SweepReport {
    /// Models called during the sweep, in call order
    pub fn models_tried(&self) -> Vec<&str> {
        self.attempts.iter().map(|a| a.model.as_str()).collect()
    }
}

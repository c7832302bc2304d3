//! Backoff delay computation

use std::time::Duration;

/// Delay schedule between retries
pub trait BackoffStrategy: Send + Sync {
    /// Delay before the given retry (0-indexed)
    fn delay_for_attempt(&self, attempt: u32) -> Duration;
}

/// Delay grows by a fixed increment per retry, up to a cap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearBackoff {
    initial_delay: Duration,
    increment: Duration,
    max_delay: Duration,
}

impl LinearBackoff {
    pub fn new(initial_delay: Duration, increment: Duration, max_delay: Duration) -> Self {
        Self {
            initial_delay,
            increment,
            max_delay,
        }
    }

    /// `step`, `2 * step`, `3 * step`, ... without a practical cap
    pub fn stepped(step: Duration) -> Self {
        Self::new(step, step, Duration::MAX)
    }
}

impl BackoffStrategy for LinearBackoff {
    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let extra = self
            .increment
            .checked_mul(attempt)
            .unwrap_or(Duration::MAX);
        self.initial_delay
            .checked_add(extra)
            .unwrap_or(Duration::MAX)
            .min(self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepped_backoff() {
        let backoff = LinearBackoff::stepped(Duration::from_secs(5));
        assert_eq!(backoff.delay_for_attempt(0), Duration::from_secs(5));
        assert_eq!(backoff.delay_for_attempt(1), Duration::from_secs(10));
        assert_eq!(backoff.delay_for_attempt(2), Duration::from_secs(15));
    }

    #[test]
    fn test_linear_backoff_cap() {
        let backoff = LinearBackoff::new(
            Duration::from_millis(100),
            Duration::from_millis(100),
            Duration::from_secs(1),
        );
        assert_eq!(backoff.delay_for_attempt(2), Duration::from_millis(300));
        assert_eq!(backoff.delay_for_attempt(20), Duration::from_secs(1));
    }

    #[test]
    fn test_no_overflow_on_huge_attempt() {
        let backoff = LinearBackoff::stepped(Duration::from_secs(u64::MAX / 2));
        assert_eq!(backoff.delay_for_attempt(u32::MAX), Duration::MAX);
    }
}

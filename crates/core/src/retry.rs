//! Retry policy with exponential backoff
//!
//! The policy only computes delays. Whoever owns the operation decides what
//! counts as retryable and how to sleep (the HTTP client uses tokio timers).
//!
//! # Example
//!
//! ```rust
//! use atlas_core::retry::RetryConfig;
//! use std::time::Duration;
//!
//! let policy = RetryConfig::quick().without_jitter();
//! assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(50));
//! assert_eq!(policy.delay_for_attempt(2), Duration::from_millis(100));
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one
    pub max_attempts: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Upper bound for any single delay (before jitter)
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
    /// Add up to 25% random jitter to delays
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// Short delays, for interactive commands
    #[must_use]
    pub fn quick() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(50),
            max_delay: Duration::from_millis(500),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }

    /// Long delays, for slow or rate-limited upstreams
    #[must_use]
    pub fn patient() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }

    /// A single attempt
    #[must_use]
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            initial_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            backoff_multiplier: 1.0,
            jitter: false,
        }
    }

    /// Disable jitter, making delays deterministic
    #[must_use]
    pub fn without_jitter(mut self) -> Self {
        self.jitter = false;
        self
    }

    /// Override the attempt budget
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Whether another attempt is allowed after `attempt` attempts have failed
    #[must_use]
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// Delay to wait before retry number `attempt` (1-based). Attempt 0 never waits.
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }

        let exponent = i32::try_from(attempt - 1).unwrap_or(i32::MAX);
        let base_delay = self.initial_delay.as_secs_f64() * self.backoff_multiplier.powi(exponent);
        let delay_secs = base_delay.min(self.max_delay.as_secs_f64());

        let final_delay = if self.jitter {
            delay_secs * (1.0 + jitter_fraction() * 0.25)
        } else {
            delay_secs
        };

        Duration::try_from_secs_f64(final_delay).unwrap_or(self.max_delay)
    }
}

/// Pseudo-random value in `[0, 1)`, good enough to spread retries apart
fn jitter_fraction() -> f64 {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hasher};

    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();

    let mut hasher = RandomState::new().build_hasher();
    hasher.write_u32(nanos);
    #[allow(clippy::cast_precision_loss)]
    let fraction = (hasher.finish() % 1000) as f64 / 1000.0;
    fraction
}

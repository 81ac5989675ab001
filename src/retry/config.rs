//! Retry Configuration Module
//!
//! Attempt budget and exponential-backoff parameters for the retry executor.

use std::time::Duration;

// == Defaults ==
/// Default attempt budget
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default delay before the second attempt
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Default ceiling on any single inter-attempt delay
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(10_000);

/// Default growth factor between consecutive delays
pub const DEFAULT_BACKOFF_MULTIPLIER: f64 = 1.5;

// == Retry Config ==
/// Parameters for one [`with_retry`](crate::retry::with_retry) invocation.
///
/// Immutable per call. Partial overrides merge over the defaults
/// field-by-field through the `with_*` builders:
///
/// ```
/// use backstop::retry::RetryConfig;
/// use std::time::Duration;
///
/// let config = RetryConfig::default()
///     .with_max_attempts(5)
///     .with_base_delay(Duration::from_millis(200));
/// assert_eq!(config.max_attempts, 5);
/// // Untouched fields keep their defaults
/// assert_eq!(config.backoff_multiplier, 1.5);
/// ```
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempt budget, at least 1
    pub max_attempts: u32,
    /// Delay before the second attempt
    pub base_delay: Duration,
    /// Cap applied to every computed delay
    pub max_delay: Duration,
    /// Multiplier applied per failed attempt
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
        }
    }
}

impl RetryConfig {
    // == Builders ==
    /// Overrides the attempt budget, clamped to at least one attempt.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Overrides the base delay.
    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Overrides the delay ceiling.
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Overrides the backoff multiplier, clamped to at least 1.0 so the
    /// schedule never shrinks. A NaN input falls back to 1.0.
    pub fn with_backoff_multiplier(mut self, backoff_multiplier: f64) -> Self {
        self.backoff_multiplier = backoff_multiplier.max(1.0);
        self
    }

    // == Delay Schedule ==
    /// Computes the delay after the given 1-based failed attempt:
    /// `min(base_delay * backoff_multiplier^(attempt - 1), max_delay)`.
    ///
    /// The comparison happens in scalar space before a `Duration` is built,
    /// so a late attempt whose uncapped product would overflow `Duration`
    /// still returns `max_delay` instead of panicking.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1);
        let factor = self.backoff_multiplier.powi(exponent as i32);
        let delay_secs = self.base_delay.as_secs_f64() * factor;

        if !delay_secs.is_finite() || delay_secs >= self.max_delay.as_secs_f64() {
            return self.max_delay;
        }
        if delay_secs <= 0.0 {
            return Duration::ZERO;
        }

        Duration::from_secs_f64(delay_secs)
    }
}

//! Retry Module
//!
//! Makes a single logical operation resilient to transient failure by
//! re-invoking it with exponential backoff. Pure control flow: nothing here
//! persists beyond one invocation, and the final failure always reaches the
//! caller in its original shape.

mod config;
mod executor;

// Re-export public types
pub use config::{
    RetryConfig, DEFAULT_BACKOFF_MULTIPLIER, DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_MAX_DELAY,
};
pub use executor::{with_retry, with_retry_cancellable};

//! Retry Executor Module
//!
//! Wraps a caller-supplied async operation and re-invokes it with
//! exponential backoff until it succeeds or the attempt budget runs out.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::retry::RetryConfig;

// == With Retry ==
/// Runs `operation` until it succeeds or `config.max_attempts` is exhausted.
///
/// A success returns immediately with no delay. After an intermediate
/// failure the executor sleeps for `config.delay_for_attempt(n)` and tries
/// again. The failure of the final attempt is returned to the caller
/// unchanged: no wrapping type, no retry metadata attached.
///
/// The executor enforces no timeout of its own; a hung operation blocks the
/// calling chain until it resolves.
pub async fn with_retry<F, Fut, T, E>(config: &RetryConfig, operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    // A token nobody cancels reduces this to the plain retry loop.
    with_retry_cancellable(config, &CancellationToken::new(), operation).await
}

// == With Retry (Cancellable) ==
/// Same contract as [`with_retry`], observing `token` while backing off.
///
/// An attempt already dispatched always runs to completion; cancellation is
/// only honored during the inter-attempt delay, where it stops further
/// attempts and surfaces the most recent failure unchanged.
pub async fn with_retry_cancellable<F, Fut, T, E>(
    config: &RetryConfig,
    token: &CancellationToken,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= max_attempts => return Err(err),
            Err(err) => {
                let delay = config.delay_for_attempt(attempt);
                debug!(
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    "attempt failed, backing off"
                );

                tokio::select! {
                    () = token.cancelled() => {
                        warn!(attempt, "retry cancelled during backoff");
                        return Err(err);
                    }
                    () = tokio::time::sleep(delay) => {}
                }

                attempt += 1;
            }
        }
    }
}

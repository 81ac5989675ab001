//! Cache Maintenance Task
//!
//! Background task that periodically purges expired cache entries and
//! enforces the size bound.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that keeps a shared cache trimmed.
///
/// Each pass acquires a write lock, removes entries that have outlived their
/// TTL, and then evicts the least-accessed entries down to `max_entries`.
/// Between passes the task sleeps for `interval`.
///
/// Returns a `JoinHandle` which can be used to abort the task during
/// graceful shutdown:
///
/// ```ignore
/// let cache: SharedCache<String> = Arc::new(RwLock::new(CacheStore::default()));
/// let handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(60), 100);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_cleanup_task<V>(
    cache: SharedCache<V>,
    interval: Duration,
    max_entries: usize,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(
            interval_ms = interval.as_millis() as u64,
            max_entries, "starting cache maintenance task"
        );

        loop {
            tokio::time::sleep(interval).await;

            let (expired, evicted) = {
                let mut guard = cache.write().await;
                let expired = guard.purge_expired();
                let evicted = guard.cleanup(max_entries);
                (expired, evicted)
            };

            if expired > 0 || evicted > 0 {
                info!(expired, evicted, "cache maintenance pass removed entries");
            } else {
                debug!("cache maintenance pass found nothing to remove");
            }
        }
    })
}

//! Configuration Module
//!
//! Process-level knobs for the resilience layer, loaded from environment
//! variables with compiled-in defaults. The per-call defaults (TTLs, retry
//! parameters) stay as constants in [`crate::cache`] and [`crate::retry`]
//! and are overridden per call, not here.

use std::env;

/// Deployment configuration for the cache and its maintenance task.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use backstop::{spawn_cleanup_task, CacheStore, Config, SharedCache};
/// use tokio::sync::RwLock;
///
/// # #[tokio::main]
/// # async fn main() {
/// let config = Config::from_env();
/// let cache: SharedCache<String> = Arc::new(RwLock::new(CacheStore::new(
///     Duration::from_secs(config.default_ttl_secs),
/// )));
///
/// let handle = spawn_cleanup_task(
///     cache.clone(),
///     Duration::from_secs(config.cleanup_interval_secs),
///     config.max_entries,
/// );
/// // Later, during shutdown:
/// handle.abort();
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Size bound enforced by the maintenance task
    pub max_entries: usize,
    /// Default TTL in seconds for entries stored without an explicit TTL
    pub default_ttl_secs: u64,
    /// Maintenance task interval in seconds
    pub cleanup_interval_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Size bound for the cache (default: 100)
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `CLEANUP_INTERVAL` - Maintenance frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            max_entries: env::var("MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            default_ttl_secs: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            cleanup_interval_secs: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 100,
            default_ttl_secs: 300,
            cleanup_interval_secs: 60,
        }
    }
}

//! Backstop - a request-resilience layer for data-access code
//!
//! Two cooperating components: an in-process response cache with TTL expiry
//! and access-frequency eviction, and a retry executor that wraps outbound
//! calls with exponential backoff. Call sites compose them: consult the
//! cache, and on a miss run the remote operation under retry before
//! populating the cache with the result.
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use backstop::cache::{cache_key, CacheStore, SharedCache};
//! use backstop::retry::{with_retry, RetryConfig};
//! use tokio::sync::RwLock;
//!
//! # #[derive(Debug)]
//! # struct FetchError;
//! # async fn fetch_topic(id: u32) -> Result<String, FetchError> { Ok(String::new()) }
//! # async fn example() -> Result<String, FetchError> {
//! let cache: SharedCache<String> = Arc::new(RwLock::new(CacheStore::default()));
//!
//! let key = cache_key(&["topic", "42"]);
//! if let Some(cached) = cache.write().await.get(&key) {
//!     return Ok(cached);
//! }
//!
//! let config = RetryConfig::default().with_base_delay(Duration::from_millis(500));
//! let fresh = with_retry(&config, || fetch_topic(42)).await?;
//! cache.write().await.set(key, fresh.clone());
//! # Ok(fresh)
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod retry;
pub mod tasks;

pub use cache::{CacheStats, CacheStore, SharedCache};
pub use config::Config;
pub use retry::{with_retry, with_retry_cancellable, RetryConfig};
pub use tasks::spawn_cleanup_task;

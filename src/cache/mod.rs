//! Cache Module
//!
//! Provides the in-process response cache: lazy TTL expiry, access-frequency
//! eviction, and point-in-time statistics.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default TTL for individual resources
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Extended TTL for aggregate responses that are expensive to recompute
pub const EXTENDED_TTL: Duration = Duration::from_secs(10 * 60);

/// Default size bound enforced by [`CacheStore::cleanup`]
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Separator used when composing cache keys from stable parts
pub const KEY_SEPARATOR: &str = "-";

// == Shared Handle ==
/// A cache store shared across tasks behind an async lock.
pub type SharedCache<V> = Arc<RwLock<CacheStore<V>>>;

// == Key Helper ==
/// Joins stable key parts with [`KEY_SEPARATOR`].
///
/// Keys built this way keep substring invalidation predictable:
/// `invalidate(cache_key(&["topic", id]))` sweeps every derived row whose
/// key embeds the same prefix.
pub fn cache_key(parts: &[&str]) -> String {
    parts.join(KEY_SEPARATOR)
}

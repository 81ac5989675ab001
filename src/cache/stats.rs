//! Cache Statistics Module
//!
//! Snapshot of the store's current shape: size, keys, and access-count
//! aggregates.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of the cache contents.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Current number of entries in the store
    pub size: usize,
    /// Every key currently present
    pub keys: Vec<String>,
    /// Sum of all per-entry access counters
    pub total_access_count: u64,
    /// Mean access count per entry, 0.0 when the store is empty
    pub average_access_count: f64,
}

impl CacheStats {
    // == Constructor ==
    /// Builds a snapshot from the raw key/counter pairs of the store.
    pub fn from_entries(mut keys: Vec<String>, total_access_count: u64) -> Self {
        let size = keys.len();
        let average_access_count = if size == 0 {
            0.0
        } else {
            total_access_count as f64 / size as f64
        };

        keys.sort_unstable();

        Self {
            size,
            keys,
            total_access_count,
            average_access_count,
        }
    }
}

//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL and
//! access-frequency metadata.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached row: the payload plus the metadata the store needs for
/// expiry and eviction decisions.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored payload
    pub value: V,
    /// Instant of insertion or last overwrite
    pub stored_at: Instant,
    /// Time-to-live, measured from `stored_at`
    pub ttl: Duration,
    /// Number of successful read hits since the last write
    pub access_count: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a fresh entry stamped with the current instant.
    ///
    /// The access counter starts at zero; only successful reads increment it.
    pub fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
            ttl,
            access_count: 0,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived its TTL.
    ///
    /// Boundary condition: an entry is still valid at exactly `elapsed == ttl`
    /// and expires strictly after.
    pub fn is_expired(&self) -> bool {
        self.stored_at.elapsed() > self.ttl
    }

    // == Time To Live ==
    /// Returns the remaining TTL, saturating at zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.stored_at.elapsed())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("payload".to_string(), Duration::from_secs(60));

        assert_eq!(entry.value, "payload");
        assert_eq!(entry.access_count, 0);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_not_expired_within_ttl() {
        let entry = CacheEntry::new(1u32, Duration::from_secs(3600));
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expired_after_ttl() {
        let mut entry = CacheEntry::new(1u32, Duration::from_millis(100));

        // Backdate the insertion past the TTL
        entry.stored_at = Instant::now() - Duration::from_millis(250);

        assert!(entry.is_expired());
    }

    #[test]
    fn test_entry_valid_near_boundary() {
        let mut entry = CacheEntry::new(1u32, Duration::from_secs(10));

        // Backdated to just inside the TTL window
        entry.stored_at = Instant::now() - Duration::from_secs(9);

        assert!(!entry.is_expired());
    }

    #[test]
    fn test_ttl_remaining() {
        let mut entry = CacheEntry::new(1u32, Duration::from_secs(10));
        entry.stored_at = Instant::now() - Duration::from_secs(4);

        let remaining = entry.ttl_remaining();
        assert!(remaining <= Duration::from_secs(6));
        assert!(remaining >= Duration::from_secs(5));
    }

    #[test]
    fn test_ttl_remaining_expired_is_zero() {
        let mut entry = CacheEntry::new(1u32, Duration::from_millis(50));
        entry.stored_at = Instant::now() - Duration::from_secs(1);

        assert_eq!(entry.ttl_remaining(), Duration::ZERO);
    }
}

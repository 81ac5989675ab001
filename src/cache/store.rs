//! Cache Store Module
//!
//! Main cache engine: HashMap storage with lazy TTL expiry and
//! access-frequency (LFU-style) trimming.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats, DEFAULT_TTL};

// == Cache Store ==
/// In-process response cache keyed by string.
///
/// Expiry is lazy: an expired entry lingers until the next read touches it
/// or a cleanup pass removes it, but it is never returned to a caller.
/// Eviction is by access frequency via [`CacheStore::cleanup`], which callers
/// (or the background task in [`crate::tasks`]) trigger explicitly.
///
/// Every operation is infallible; absence is an ordinary `None`.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// TTL applied by [`CacheStore::set`] when the caller gives none
    default_ttl: Duration,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store with the given default TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl,
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` for a missing key. An entry past its TTL is removed on
    /// the spot and reported as absent. A hit increments the entry's access
    /// counter and returns a clone of the value; `ttl` and `stored_at` are
    /// untouched.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let expired = self.entries.get(key).map(|entry| entry.is_expired())?;

        if expired {
            self.entries.remove(key);
            return None;
        }

        let entry = self.entries.get_mut(key)?;
        entry.access_count += 1;
        Some(entry.value.clone())
    }

    // == Set ==
    /// Stores a value under `key` with the store's default TTL.
    ///
    /// Unconditionally overwrites: the timestamp is reset to now and the
    /// access counter back to zero, whether or not the key existed.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let ttl = self.default_ttl;
        self.set_with_ttl(key, value, ttl);
    }

    /// Stores a value under `key` with an explicit TTL.
    ///
    /// Same overwrite semantics as [`CacheStore::set`].
    pub fn set_with_ttl(&mut self, key: impl Into<String>, value: V, ttl: Duration) {
        self.entries.insert(key.into(), CacheEntry::new(value, ttl));
    }

    // == Invalidate ==
    /// Removes every entry whose key contains `pattern` as a substring.
    ///
    /// Plain substring containment, not a prefix or regex match; used to
    /// burst-evict all rows related to a mutated resource. Returns the
    /// number of entries removed.
    pub fn invalidate(&mut self, pattern: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.contains(pattern));
        before - self.entries.len()
    }

    // == Clear ==
    /// Removes all entries unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Purge Expired ==
    /// Removes every entry that has outlived its TTL.
    ///
    /// Returns the number of entries removed. This is the sweep that
    /// reclaims lazily expired rows no read has touched.
    pub fn purge_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    // == Cleanup ==
    /// Trims the store down to `max_entries` by access frequency.
    ///
    /// No-op when the store is already within bounds. Otherwise entries are
    /// ranked ascending by access count — ties broken by oldest `stored_at`
    /// first, so the outcome is deterministic — and the lowest-ranked excess
    /// is removed. Returns the number of entries evicted.
    pub fn cleanup(&mut self, max_entries: usize) -> usize {
        if self.entries.len() <= max_entries {
            return 0;
        }

        let mut ranked: Vec<(String, u64, Instant)> = self
            .entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.access_count, entry.stored_at))
            .collect();

        // Least-accessed first; oldest first among equals
        ranked.sort_by(|a, b| a.1.cmp(&b.1).then(a.2.cmp(&b.2)));

        let excess = self.entries.len() - max_entries;
        for (key, _, _) in ranked.into_iter().take(excess) {
            self.entries.remove(&key);
        }

        excess
    }

    // == Stats ==
    /// Returns a snapshot of the current size, keys, and access counters.
    pub fn stats(&self) -> CacheStats {
        let keys = self.entries.keys().cloned().collect();
        let total = self.entries.values().map(|entry| entry.access_count).sum();
        CacheStats::from_entries(keys, total)
    }

    // == Length ==
    /// Returns the current number of entries, expired stragglers included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn store() -> CacheStore<String> {
        CacheStore::new(Duration::from_secs(300))
    }

    #[test]
    fn test_store_new() {
        let s = store();
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
    }

    #[test]
    fn test_store_set_and_get() {
        let mut s = store();

        s.set("key1", "value1".to_string());

        assert_eq!(s.get("key1"), Some("value1".to_string()));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_store_get_missing() {
        let mut s = store();
        assert_eq!(s.get("nonexistent"), None);
    }

    #[test]
    fn test_store_overwrite_resets_metadata() {
        let mut s = store();

        s.set("key1", "value1".to_string());
        s.get("key1");
        s.get("key1");
        assert_eq!(s.stats().total_access_count, 2);

        // Overwrite resets the counter to zero
        s.set("key1", "value2".to_string());

        assert_eq!(s.stats().total_access_count, 0);
        assert_eq!(s.get("key1"), Some("value2".to_string()));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_store_ttl_expiry_removes_entry() {
        let mut s = store();

        s.set_with_ttl("short", "v".to_string(), Duration::from_millis(40));

        assert_eq!(s.get("short"), Some("v".to_string()));

        sleep(Duration::from_millis(90));

        // Expired read: absent, and the entry no longer counts toward size
        assert_eq!(s.get("short"), None);
        assert_eq!(s.stats().size, 0);
    }

    #[test]
    fn test_store_expired_entry_lingers_until_read() {
        let mut s = store();

        s.set_with_ttl("short", "v".to_string(), Duration::from_millis(20));
        sleep(Duration::from_millis(60));

        // Lazy expiry: still counted until something touches it
        assert_eq!(s.len(), 1);
        assert_eq!(s.get("short"), None);
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn test_store_access_count_hits_only() {
        let mut s = store();

        s.set("key1", "value1".to_string());
        s.get("key1");
        s.get("key1");
        s.get("key1");
        // Misses never touch a counter
        s.get("missing");

        let stats = s.stats();
        assert_eq!(stats.total_access_count, 3);
        assert_eq!(stats.average_access_count, 3.0);
    }

    #[test]
    fn test_store_invalidate_substring() {
        let mut s = store();

        s.set("topic-1", "a".to_string());
        s.set("topic-1-detail", "b".to_string());
        s.set("topic-10", "c".to_string());
        s.set("topic-2", "d".to_string());

        // Substring match: "topic-10" contains "topic-1" and goes with it
        let removed = s.invalidate("topic-1");

        assert_eq!(removed, 3);
        assert_eq!(s.get("topic-1"), None);
        assert_eq!(s.get("topic-1-detail"), None);
        assert_eq!(s.get("topic-10"), None);
        assert_eq!(s.get("topic-2"), Some("d".to_string()));
    }

    #[test]
    fn test_store_invalidate_no_match() {
        let mut s = store();

        s.set("topic-1", "a".to_string());

        assert_eq!(s.invalidate("question"), 0);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_store_clear() {
        let mut s = store();

        s.set("a", "1".to_string());
        s.set("b", "2".to_string());
        s.clear();

        assert!(s.is_empty());
        assert_eq!(s.get("a"), None);
    }

    #[test]
    fn test_store_purge_expired() {
        let mut s = store();

        s.set_with_ttl("short", "v".to_string(), Duration::from_millis(20));
        s.set_with_ttl("long", "w".to_string(), Duration::from_secs(60));

        sleep(Duration::from_millis(60));

        assert_eq!(s.purge_expired(), 1);
        assert_eq!(s.len(), 1);
        assert_eq!(s.get("long"), Some("w".to_string()));
    }

    #[test]
    fn test_store_cleanup_noop_within_bounds() {
        let mut s = store();

        s.set("a", "1".to_string());
        s.set("b", "2".to_string());

        assert_eq!(s.cleanup(2), 0);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_store_cleanup_evicts_least_accessed() {
        let mut s = store();

        s.set("cold", "1".to_string());
        s.set("warm", "2".to_string());
        s.set("hot", "3".to_string());

        s.get("warm");
        s.get("hot");
        s.get("hot");

        let evicted = s.cleanup(2);

        assert_eq!(evicted, 1);
        assert_eq!(s.len(), 2);
        assert_eq!(s.get("cold"), None);
        assert!(s.get("warm").is_some());
        assert!(s.get("hot").is_some());
    }

    #[test]
    fn test_store_cleanup_tie_break_oldest_first() {
        let mut s = store();

        // Equal access counts; insertion order separates stored_at
        s.set("older", "1".to_string());
        sleep(Duration::from_millis(10));
        s.set("newer", "2".to_string());

        let evicted = s.cleanup(1);

        assert_eq!(evicted, 1);
        assert_eq!(s.get("older"), None);
        assert!(s.get("newer").is_some());
    }

    #[test]
    fn test_store_cleanup_bound_holds() {
        let mut s = store();

        for i in 0..10 {
            s.set(format!("key-{i}"), i.to_string());
        }

        s.cleanup(4);
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn test_store_stats_shape() {
        let mut s = store();

        s.set("a", "1".to_string());
        s.set("b", "2".to_string());
        s.get("a");

        let stats = s.stats();
        assert_eq!(stats.size, 2);
        assert_eq!(stats.keys, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(stats.total_access_count, 1);
        assert_eq!(stats.average_access_count, 0.5);
    }

    #[test]
    fn test_store_default_ttl_applied() {
        let mut s: CacheStore<String> = CacheStore::new(Duration::from_millis(30));

        s.set("k", "v".to_string());
        sleep(Duration::from_millis(80));

        assert_eq!(s.get("k"), None);
    }
}

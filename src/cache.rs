//! Digest memoization shared across threads
//!
//! Reads take a shared lock on the map; inserts take the write lock. When the
//! map reaches capacity it is cleared before the next insert.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Bounded memo of input string to digest
pub struct DigestCache<V = String> {
    entries: Arc<RwLock<HashMap<String, V>>>,
    capacity: usize,
}

impl<V: Clone> DigestCache<V> {
    /// Create a cache holding at most `capacity` entries; 0 disables caching
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.entries.read().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: V) {
        if self.capacity == 0 {
            return;
        }
        let mut map = self.entries.write();
        if map.len() >= self.capacity && !map.contains_key(key) {
            tracing::debug!(capacity = self.capacity, "Digest cache full, clearing");
            map.clear();
        }
        map.insert(key.to_string(), value);
    }

    /// Return the cached value or compute, store, and return it
    pub fn get_or_compute<F>(&self, key: &str, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(key) {
            return value;
        }
        let value = compute();
        self.insert(key, value.clone());
        value
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl<V> Clone for DigestCache<V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            capacity: self.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_get_or_compute_memoizes() {
        let cache: DigestCache = DigestCache::new(8);
        let calls = AtomicUsize::new(0);
        let compute = || {
            calls.fetch_add(1, Ordering::SeqCst);
            "digest".to_string()
        };
        assert_eq!(cache.get_or_compute("k", compute), "digest");
        assert_eq!(cache.get_or_compute("k", compute), "digest");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_zero_capacity_disables() {
        let cache: DigestCache = DigestCache::new(0);
        cache.insert("k", "v".to_string());
        assert!(cache.is_empty());
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_full_cache_clears() {
        let cache: DigestCache<u32> = DigestCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("a", 10);
        assert_eq!(cache.len(), 2);
        cache.insert("c", 3);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("c"), Some(3));
        assert_eq!(cache.get("a"), None);
    }

    #[test]
    fn test_clones_share_entries() {
        let cache: DigestCache<u32> = DigestCache::new(4);
        let other = cache.clone();
        other.insert("x", 7);
        assert_eq!(cache.get("x"), Some(7));
        cache.clear();
        assert!(other.is_empty());
    }

    #[test]
    fn test_concurrent_inserts() {
        let cache: DigestCache<usize> = DigestCache::new(1024);
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        let key = format!("{t}-{i}");
                        assert_eq!(cache.get_or_compute(&key, || t * 100 + i), t * 100 + i);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 400);
    }
}

use dashmap::DashMap;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub payload: V,
    pub fetched_at: Instant,
}

impl<V> CacheEntry<V> {
    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }

    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.age() < ttl
    }
}

/// Last successfully fetched payload per key.
///
/// Expiry is evaluated lazily on read; nothing is ever evicted except by
/// `invalidate`/`invalidate_all`. The key space is bounded by the endpoint
/// and parameter combinations that are actually requested.
pub struct TtlCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn get_fresh(&self, key: &str, ttl: Duration) -> Option<V> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(ttl))
            .map(|entry| entry.payload.clone())
    }

    pub fn get_any(&self, key: &str) -> Option<V> {
        self.entries.get(key).map(|entry| entry.payload.clone())
    }

    pub fn age(&self, key: &str) -> Option<Duration> {
        self.entries.get(key).map(|entry| entry.age())
    }

    pub fn put(&self, key: impl Into<String>, payload: V) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                payload,
                fetched_at: Instant::now(),
            },
        );
    }

    pub fn invalidate(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn invalidate_all(&self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

//! Response cache — a small key-value store with fixed-TTL expiry.
//!
//! Modeled as an injectable capability rather than process-wide state:
//! collaborators receive an `Arc<dyn ResponseCache>` explicitly, so tests
//! can substitute a deterministic fake (see `NoopCache`).

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::debug;

/// Capability trait for caching remote API responses.
pub trait ResponseCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value);
}

/// In-memory cache with a fixed time-to-live per entry.
/// Expired entries are dropped on read; there is no background eviction.
pub struct TtlCache {
    ttl: Duration,
    store: Mutex<HashMap<String, (Value, Instant)>>,
}

impl TtlCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            store: Mutex::new(HashMap::new()),
        }
    }

    pub fn clear(&self) {
        self.store.lock().unwrap().clear();
        debug!("Cache cleared");
    }
}

impl ResponseCache for TtlCache {
    fn get(&self, key: &str) -> Option<Value> {
        let mut store = self.store.lock().unwrap();
        match store.get(key) {
            None => {
                debug!("Cache miss for key: {key}");
                None
            }
            Some((_, stored_at)) if stored_at.elapsed() > self.ttl => {
                debug!("Cache expired for key: {key}");
                store.remove(key);
                None
            }
            Some((value, _)) => {
                debug!("Cache hit for key: {key}");
                Some(value.clone())
            }
        }
    }

    fn set(&self, key: &str, value: Value) {
        self.store
            .lock()
            .unwrap()
            .insert(key.to_string(), (value, Instant::now()));
        debug!("Cache set for key: {key}");
    }
}

/// Cache that stores nothing. Useful in tests and when caching is disabled.
pub struct NoopCache;

impl ResponseCache for NoopCache {
    fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    fn set(&self, _key: &str, _value: Value) {}
}

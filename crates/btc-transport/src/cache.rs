//! Freshness cache for upstream responses.
//!
//! Keyed by the exact request URL string (no query normalization; two
//! spellings of the same request are two entries). Entries are never
//! evicted: an entry past its ttl reads as a miss and sits there until the
//! next successful fetch overwrites it. Growth is bounded in practice by the
//! small key space (a handful of fixed endpoints plus address/txid
//! parameters).
//!
//! Concurrency: lookups and stores from parallel fetches are safe, but there
//! is no single-flight collapsing: two threads missing on the same key will
//! both call upstream and the later store wins.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde_json::Value;

struct CacheSlot {
    value: Value,
    stored_at: Instant,
}

/// In-memory TTL cache. Thread-safe via an internal RwLock.
///
/// The freshness window belongs to the caller, not the entry: `lookup`
/// judges age against the ttl it is handed, so one cache can serve
/// endpoints with different freshness requirements.
#[derive(Default)]
pub struct FreshnessCache {
    entries: RwLock<HashMap<String, CacheSlot>>,
}

impl FreshnessCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached value if present and younger than `ttl`.
    ///
    /// An expired entry reads as a miss; it is not removed.
    pub fn lookup(&self, key: &str, ttl: Duration) -> Option<Value> {
        let entries = self.entries.read();
        let slot = entries.get(key)?;
        if slot.stored_at.elapsed() < ttl {
            Some(slot.value.clone())
        } else {
            None
        }
    }

    /// Insert or overwrite the entry with the current timestamp.
    pub fn store(&self, key: &str, value: Value) {
        self.entries.write().insert(
            key.to_string(),
            CacheSlot {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Number of entries held, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

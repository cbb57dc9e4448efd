//! In-memory KV store implementation using the moka crate.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::future::Cache;

use movecar_core::config::store::MemoryStoreConfig;
use movecar_core::result::AppResult;
use movecar_core::traits::kv::KvStore;

/// A stored value together with its own expiry deadline.
///
/// moka's cache-level TTL is one duration for the whole cache, but this
/// store holds entries with different lifetimes (payloads and status
/// records). Each entry carries its deadline and `get` filters expired
/// ones out, so an overwrite always restarts the clock.
#[derive(Debug, Clone)]
struct StoredEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl StoredEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| deadline <= now)
    }
}

/// In-memory KV store using moka.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    /// The underlying moka cache.
    cache: Cache<String, StoredEntry>,
}

impl MemoryStore {
    /// Create a new in-memory store from configuration.
    pub fn new(config: &MemoryStoreConfig) -> Self {
        let cache = Cache::builder().max_capacity(config.max_capacity).build();
        Self { cache }
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self.cache.get(key).await {
            Some(entry) if entry.is_expired(Instant::now()) => {
                self.cache.invalidate(key).await;
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value)),
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> AppResult<()> {
        let entry = StoredEntry {
            value: value.to_string(),
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.invalidate(key).await;
        Ok(())
    }
}

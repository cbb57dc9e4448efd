//! Key-value store trait for pluggable storage backends.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for KV backends (Redis or in-memory).
///
/// Values are opaque strings; callers handle their own serialization.
/// These three operations are the whole contract: no compare-and-swap,
/// no scans, no counters. The notification lifecycle must stay correct
/// with nothing more.
#[async_trait]
pub trait KvStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist or has expired.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store a value, overwriting any previous one. With `ttl` set, the
    /// entry expires that long after this write.
    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> AppResult<()>;

    /// Delete a key. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;
}

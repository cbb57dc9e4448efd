//! Store manager that dispatches to the configured backend.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use movecar_core::config::store::StoreConfig;
use movecar_core::error::AppError;
use movecar_core::result::AppResult;
use movecar_core::traits::kv::KvStore;

/// Key probed by [`StoreManager::health_check`]. Never written.
const HEALTH_PROBE_KEY: &str = "health:probe";

/// Store manager that wraps the configured KV backend.
///
/// The backend is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner KV store.
    inner: Arc<dyn KvStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub async fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn KvStore> = match config.provider.as_str() {
            #[cfg(feature = "redis-backend")]
            "redis" => {
                info!("Initializing Redis store backend");
                let client = crate::redis::RedisClient::connect(&config.redis).await?;
                Arc::new(crate::redis::RedisStore::new(client))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory store backend");
                Arc::new(crate::memory::MemoryStore::new(&config.memory))
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: memory, redis"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing backend (for testing).
    pub fn from_backend(backend: Arc<dyn KvStore>) -> Self {
        Self { inner: backend }
    }

    /// Returns a shared handle to the inner backend.
    pub fn backend(&self) -> Arc<dyn KvStore> {
        Arc::clone(&self.inner)
    }

    /// Check that the backend answers reads. Used by the health endpoint.
    pub async fn health_check(&self) -> AppResult<()> {
        self.inner.get(HEALTH_PROBE_KEY).await.map(|_| ())
    }
}

#[async_trait]
impl KvStore for StoreManager {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> AppResult<()> {
        self.inner.put(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.inner.delete(key).await
    }
}

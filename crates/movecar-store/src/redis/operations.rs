//! Redis KV store implementation.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use movecar_core::error::{AppError, ErrorKind};
use movecar_core::result::AppResult;
use movecar_core::traits::kv::KvStore;

use super::client::RedisClient;

/// Redis-backed KV store.
///
/// TTLs map straight onto `SET ... EX`; Redis enforces expiry
/// server-side so reads after the deadline simply return nothing.
#[derive(Debug, Clone)]
pub struct RedisStore {
    /// Redis client.
    client: RedisClient,
}

impl RedisStore {
    /// Create a new Redis store.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Map a Redis error to an AppError.
    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(ErrorKind::Store, format!("Redis error: {e}"), e)
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: Option<String> = conn.get(&full_key).await.map_err(Self::map_err)?;
        Ok(result)
    }

    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        match ttl {
            Some(ttl) => {
                let _: () = conn
                    .set_ex(&full_key, value, ttl.as_secs())
                    .await
                    .map_err(Self::map_err)?;
            }
            None => {
                let _: () = conn.set(&full_key, value).await.map_err(Self::map_err)?;
            }
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let _: () = conn.del(&full_key).await.map_err(Self::map_err)?;
        Ok(())
    }
}

use crate::backend::{StorageBackend, StorageError};
use async_trait::async_trait;
use redis::AsyncCommands;

/// Redis-backed storage for deployments that share the cache across
/// processes. Expiry stays in the cache layer rather than `SET EX` so lazy
/// eviction and sweep counts behave the same as the in-memory backend.
#[derive(Clone)]
pub struct RedisBackend {
    client: redis::Client,
}

impl RedisBackend {
    pub fn new(connection_string: &str) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(connection_string)?;
        Ok(Self { client })
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, StorageError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl StorageBackend for RedisBackend {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.connection().await?;
        conn.get(key)
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }

    async fn write(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(key)
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let mut conn = self.connection().await?;
        let pattern = format!("{}*", prefix);
        conn.keys(pattern)
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

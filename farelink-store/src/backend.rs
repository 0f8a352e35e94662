use async_trait::async_trait;
use farelink_core::SearchError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("stored value could not be encoded or decoded: {0}")]
    Corrupt(String),
}

/// Any storage failure is one caller-visible condition: the cache is
/// unavailable. Callers downgrade it to a miss rather than failing.
impl From<StorageError> for SearchError {
    fn from(e: StorageError) -> Self {
        SearchError::CacheUnavailable(e.to_string())
    }
}

/// Durable key-value storage used by the search cache. Values are opaque
/// serialized strings; TTL accounting lives in the cache layer so every
/// backend behaves identically under expiry tests.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Unconditional overwrite, last-write-wins.
    async fn write(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}

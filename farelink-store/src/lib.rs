pub mod app_config;
pub mod backend;
pub mod cache;
pub mod memory;
pub mod redis_backend;
pub mod sweep;

pub use backend::{StorageBackend, StorageError};
pub use cache::{CacheEntry, CacheStats, SearchCache, SearchKey};
pub use memory::MemoryBackend;
pub use redis_backend::RedisBackend;
pub use sweep::spawn_eviction_sweeper;

use crate::backend::{StorageBackend, StorageError};
use chrono::{DateTime, Duration, Utc};
use farelink_core::{FlightRow, SearchParams, SeatRow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

const KEY_PREFIX: &str = "search:";

/// Deterministic fingerprint of one search-parameter set.
///
/// Fields are encoded in a fixed order with `:` delimiters, so logically
/// equal parameter sets always collide and distinct sets never do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchKey(String);

impl SearchKey {
    pub fn from_params(params: &SearchParams) -> Self {
        let return_part = match params.return_date {
            Some(date) => date.to_string(),
            None => "oneway".to_string(),
        };
        SearchKey(format!(
            "{}{}:{}:{}:{}:{}:{}-{}-{}",
            KEY_PREFIX,
            params.origin.to_ascii_uppercase(),
            params.destination.to_ascii_uppercase(),
            params.departure_date,
            return_part,
            params.cabin_class.code(),
            params.passengers.adults,
            params.passengers.children,
            params.passengers.infants,
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One cached search result set: the flight rows plus the raw seat side
/// table they were fetched with. Written once on a miss, read-only after,
/// superseded whole by the next miss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub flights: Vec<FlightRow>,
    pub seats: Vec<SeatRow>,
    pub written_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(flights: Vec<FlightRow>, seats: Vec<SeatRow>) -> Self {
        Self {
            flights,
            seats,
            written_at: Utc::now(),
        }
    }

    fn is_expired_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.written_at > ttl
    }
}

/// Snapshot of cache telemetry counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// TTL-bounded cache of search results over a pluggable storage backend.
///
/// Reads evict lazily; [`crate::spawn_eviction_sweeper`] adds a periodic
/// sweep on top. Writes are whole-entry replacements, so concurrent readers
/// need no coordination beyond the backend's own.
pub struct SearchCache {
    backend: Arc<dyn StorageBackend>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl SearchCache {
    pub fn new(backend: Arc<dyn StorageBackend>, ttl_seconds: u64) -> Self {
        Self {
            backend,
            ttl: Duration::seconds(ttl_seconds as i64),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Returns the live entry for `key`, or `None` when nothing is stored or
    /// the stored entry has outlived the TTL. Expired and undecodable
    /// entries are deleted on the way out.
    pub async fn get(&self, key: &SearchKey) -> Result<Option<CacheEntry>, StorageError> {
        let raw = match self.backend.read(key.as_str()).await? {
            Some(raw) => raw,
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                return Ok(None);
            }
        };

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(key = %key, "dropping undecodable cache entry: {}", e);
                self.remove_quietly(key).await;
                self.misses.fetch_add(1, Ordering::Relaxed);
                return Ok(None);
            }
        };

        if entry.is_expired_at(Utc::now(), self.ttl) {
            debug!(key = %key, "cache entry expired, evicting lazily");
            self.remove_quietly(key).await;
            self.evictions.fetch_add(1, Ordering::Relaxed);
            self.misses.fetch_add(1, Ordering::Relaxed);
            return Ok(None);
        }

        self.hits.fetch_add(1, Ordering::Relaxed);
        Ok(Some(entry))
    }

    /// Stores `entry` under `key`, replacing any previous entry.
    pub async fn put(&self, key: &SearchKey, entry: &CacheEntry) -> Result<(), StorageError> {
        let raw = serde_json::to_string(entry).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        self.backend.write(key.as_str(), raw).await?;
        debug!(key = %key, flights = entry.flights.len(), "cache entry written");
        Ok(())
    }

    /// Scans the whole keyspace and removes every entry past its TTL.
    /// Running it twice back to back removes nothing the second time.
    pub async fn evict_expired(&self) -> Result<usize, StorageError> {
        let now = Utc::now();
        let mut removed = 0;

        for key in self.backend.keys(KEY_PREFIX).await? {
            let Some(raw) = self.backend.read(&key).await? else {
                continue;
            };
            let expired = match serde_json::from_str::<CacheEntry>(&raw) {
                Ok(entry) => entry.is_expired_at(now, self.ttl),
                // Undecodable entries can never be served again
                Err(_) => true,
            };
            if expired {
                self.backend.remove(&key).await?;
                removed += 1;
            }
        }

        if removed > 0 {
            self.evictions.fetch_add(removed as u64, Ordering::Relaxed);
            info!("evicted {} expired search entries", removed);
        }
        Ok(removed)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    async fn remove_quietly(&self, key: &SearchKey) {
        if let Err(e) = self.backend.remove(key.as_str()).await {
            warn!(key = %key, "failed to remove cache entry: {}", e);
        }
    }
}

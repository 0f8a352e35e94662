use crate::cache::SearchCache;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Spawns the periodic eviction sweep that complements the cache's lazy
/// eviction. The returned handle belongs to the caller; abort it on
/// shutdown.
pub fn spawn_eviction_sweeper(cache: Arc<SearchCache>, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!("eviction sweeper started, interval {}s", interval_secs);

        loop {
            tokio::time::sleep(interval).await;

            match cache.evict_expired().await {
                Ok(0) => debug!("sweep found no expired entries"),
                Ok(removed) => info!("sweep removed {} expired entries", removed),
                Err(e) => warn!("sweep skipped, storage unavailable: {}", e),
            }
        }
    })
}

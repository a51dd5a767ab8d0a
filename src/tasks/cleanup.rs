//! Cache Sweep Task
//!
//! Background task that periodically purges expired forecast-cache
//! entries. Lazy eviction on read already keeps the cache correct; the
//! sweep only reclaims memory for keys nobody reads again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::services::ForecastCache;

/// Spawns a background task that periodically purges expired entries.
///
/// # Arguments
/// * `cache` - handle to the forecast cache
/// * `interval_secs` - seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during graceful
/// shutdown.
pub fn spawn_cleanup_task(cache: ForecastCache, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "Cache sweep task started (interval: {}s)",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let purged = cache.purge_expired().await;
            if purged > 0 {
                debug!("Cache sweep removed {} expired entries", purged);
            }
        }
    })
}

//! Forecast service
//!
//! CRUD over the forecasts collection with a read-through TTL cache in
//! front of the read paths. Three key namespaces are in play:
//!
//! - `cache_all_forecasts` for the unfiltered listing
//! - `cache_forecast_<id>` for single records
//! - `cache_location_<locationId>` for per-location listings
//!
//! Writes hit the repository first and only then invalidate, so the
//! cache never outlives a committed write for the listing and record
//! keys. Location-scoped keys are not invalidated by writes and simply
//! age out at the TTL; see DESIGN.md for the reasoning.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::CacheStore;
use crate::error::{ApiError, Result};
use crate::models::{Forecast, ForecastPatch};
use crate::repository::DocumentRepository;

use super::{decode, encode};

const FORECAST_COLLECTION: &str = "forecasts";
const CACHE_ALL_FORECASTS: &str = "cache_all_forecasts";

fn forecast_key(id: &str) -> String {
    format!("cache_forecast_{}", id)
}

fn location_key(location_id: &str) -> String {
    format!("cache_location_{}", location_id)
}

// == Forecast Cache ==
/// The two typed stores backing the forecast read paths.
///
/// Listings (collection-level and location-scoped) and single records
/// live in separate stores so each namespace keeps a concrete payload
/// type. Constructed once at startup and shared by handle.
#[derive(Clone)]
pub struct ForecastCache {
    /// Collection-level and location-scoped listings
    lists: Arc<RwLock<CacheStore<Vec<Forecast>>>>,
    /// Single records keyed by id
    records: Arc<RwLock<CacheStore<Forecast>>>,
}

impl ForecastCache {
    /// Creates an empty cache whose entries live `default_ttl` unless a
    /// set call overrides it.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            lists: Arc::new(RwLock::new(CacheStore::new(default_ttl))),
            records: Arc::new(RwLock::new(CacheStore::new(default_ttl))),
        }
    }

    /// Drops expired entries from both stores; returns how many went.
    pub async fn purge_expired(&self) -> usize {
        let mut purged = self.lists.write().await.purge_expired();
        purged += self.records.write().await.purge_expired();
        purged
    }

    /// Full reset. Used between test runs.
    pub async fn clear_all(&self) {
        self.lists.write().await.clear_all();
        self.records.write().await.clear_all();
    }

    /// Number of live entries across both stores.
    pub async fn len(&self) -> usize {
        self.lists.read().await.len() + self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

// == Forecast Service ==
pub struct ForecastService {
    repo: Arc<dyn DocumentRepository>,
    cache: ForecastCache,
}

impl ForecastService {
    pub fn new(repo: Arc<dyn DocumentRepository>, cache: ForecastCache) -> Self {
        Self { repo, cache }
    }

    // == Create ==
    /// Persists a new forecast and invalidates the collection listing.
    ///
    /// When the caller supplied its own id, the record key is cleared
    /// too: an earlier read may have cached a record under that id.
    /// Auto-generated ids cannot have been cached, so nothing to clear.
    pub async fn create(&self, forecast: Forecast) -> Result<Forecast> {
        let supplied_id = forecast.id.clone();
        let data = encode(&forecast)?;
        let id = self
            .repo
            .create_document(FORECAST_COLLECTION, data, supplied_id.clone())
            .await?;

        // Invalidation runs only after the write has committed
        self.cache.lists.write().await.clear(CACHE_ALL_FORECASTS);
        if supplied_id.is_some() {
            self.cache.records.write().await.clear(&forecast_key(&id));
        }

        Ok(Forecast {
            id: Some(id),
            ..forecast
        })
    }

    // == List All ==
    /// Read-through listing over `cache_all_forecasts`.
    pub async fn get_all(&self) -> Result<Vec<Forecast>> {
        if let Some(cached) = self.cache.lists.write().await.get(CACHE_ALL_FORECASTS) {
            debug!("Serving forecast listing from cache");
            return Ok(cached);
        }

        let docs = self.repo.get_documents(FORECAST_COLLECTION).await?;
        let forecasts: Vec<Forecast> = docs.into_iter().map(decode).collect::<Result<Vec<_>>>()?;

        self.cache
            .lists
            .write()
            .await
            .set(CACHE_ALL_FORECASTS, forecasts.clone(), None);

        Ok(forecasts)
    }

    // == Get By Id ==
    /// Read-through single-record fetch over `cache_forecast_<id>`.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Forecast>> {
        let key = forecast_key(id);
        if let Some(cached) = self.cache.records.write().await.get(&key) {
            debug!("Serving forecast {} from cache", id);
            return Ok(Some(cached));
        }

        let Some(doc) = self.repo.get_document_by_id(FORECAST_COLLECTION, id).await? else {
            return Ok(None);
        };
        let forecast: Forecast = decode(doc)?;

        self.cache
            .records
            .write()
            .await
            .set(key, forecast.clone(), None);

        Ok(Some(forecast))
    }

    // == List By Location ==
    /// Read-through per-location listing over `cache_location_<id>`.
    ///
    /// The repository has no filtered query, so a miss fetches the whole
    /// collection and filters here before caching the subset.
    pub async fn get_by_location(&self, location_id: &str) -> Result<Vec<Forecast>> {
        let key = location_key(location_id);
        if let Some(cached) = self.cache.lists.write().await.get(&key) {
            debug!("Serving forecasts for location {} from cache", location_id);
            return Ok(cached);
        }

        let docs = self.repo.get_documents(FORECAST_COLLECTION).await?;
        let forecasts: Vec<Forecast> = docs
            .into_iter()
            .map(decode)
            .collect::<Result<Vec<Forecast>>>()?
            .into_iter()
            .filter(|f| f.location_id == location_id)
            .collect();

        self.cache
            .lists
            .write()
            .await
            .set(key, forecasts.clone(), None);

        Ok(forecasts)
    }

    // == Update ==
    /// Merges the patch into the stored record, invalidates the listing
    /// and record keys, then reads the record back through the cache so
    /// the caller sees (and repopulates) the fresh row.
    pub async fn update(&self, id: &str, patch: ForecastPatch) -> Result<Option<Forecast>> {
        let fields = encode(&patch)?;
        match self
            .repo
            .update_document(FORECAST_COLLECTION, id, fields)
            .await
        {
            Ok(()) => {}
            // Missing record is a 404 for the caller, and the cache is
            // left untouched since nothing was written
            Err(ApiError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        }

        self.cache.lists.write().await.clear(CACHE_ALL_FORECASTS);
        self.cache.records.write().await.clear(&forecast_key(id));

        self.get_by_id(id).await
    }

    // == Delete ==
    /// Removes a forecast; `false` when the id has no record.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        if self.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        self.repo.delete_document(FORECAST_COLLECTION, id).await?;

        self.cache.lists.write().await.clear(CACHE_ALL_FORECASTS);
        self.cache.records.write().await.clear(&forecast_key(id));

        Ok(true)
    }
}

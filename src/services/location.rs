//! Location service
//!
//! Plain CRUD over the locations collection.

use std::sync::Arc;

use crate::error::{ApiError, Result};
use crate::models::{Location, LocationPatch};
use crate::repository::DocumentRepository;

use super::{decode, encode};

const LOCATION_COLLECTION: &str = "locations";

// == Location Service ==
pub struct LocationService {
    repo: Arc<dyn DocumentRepository>,
}

impl LocationService {
    pub fn new(repo: Arc<dyn DocumentRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, location: Location) -> Result<Location> {
        let supplied_id = location.id.clone();
        let data = encode(&location)?;
        let id = self
            .repo
            .create_document(LOCATION_COLLECTION, data, supplied_id)
            .await?;

        Ok(Location {
            id: Some(id),
            ..location
        })
    }

    pub async fn get_all(&self) -> Result<Vec<Location>> {
        let docs = self.repo.get_documents(LOCATION_COLLECTION).await?;
        docs.into_iter().map(decode).collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Location>> {
        match self.repo.get_document_by_id(LOCATION_COLLECTION, id).await? {
            Some(doc) => Ok(Some(decode(doc)?)),
            None => Ok(None),
        }
    }

    pub async fn update(&self, id: &str, patch: LocationPatch) -> Result<Option<Location>> {
        let fields = encode(&patch)?;
        match self
            .repo
            .update_document(LOCATION_COLLECTION, id, fields)
            .await
        {
            Ok(()) => self.get_by_id(id).await,
            Err(ApiError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        if self.get_by_id(id).await?.is_none() {
            return Ok(false);
        }
        self.repo.delete_document(LOCATION_COLLECTION, id).await?;
        Ok(true)
    }
}

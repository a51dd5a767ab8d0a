//! Alert service
//!
//! Plain CRUD over the alerts collection. Alerts change too often and
//! are read too rarely to be worth caching, so every read goes straight
//! to the repository.

use std::sync::Arc;

use crate::error::{ApiError, Result};
use crate::models::{Alert, AlertPatch};
use crate::repository::DocumentRepository;

use super::{decode, encode};

const ALERTS_COLLECTION: &str = "alerts";

// == Alert Service ==
pub struct AlertService {
    repo: Arc<dyn DocumentRepository>,
}

impl AlertService {
    pub fn new(repo: Arc<dyn DocumentRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, alert: Alert) -> Result<Alert> {
        let supplied_id = alert.id.clone();
        let data = encode(&alert)?;
        let id = self
            .repo
            .create_document(ALERTS_COLLECTION, data, supplied_id)
            .await?;

        Ok(Alert {
            id: Some(id),
            ..alert
        })
    }

    pub async fn get_all(&self) -> Result<Vec<Alert>> {
        let docs = self.repo.get_documents(ALERTS_COLLECTION).await?;
        docs.into_iter().map(decode).collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Alert>> {
        match self.repo.get_document_by_id(ALERTS_COLLECTION, id).await? {
            Some(doc) => Ok(Some(decode(doc)?)),
            None => Ok(None),
        }
    }

    pub async fn get_by_location(&self, location_id: &str) -> Result<Vec<Alert>> {
        let alerts = self.get_all().await?;
        Ok(alerts
            .into_iter()
            .filter(|a| a.location_id == location_id)
            .collect())
    }

    pub async fn update(&self, id: &str, patch: AlertPatch) -> Result<Option<Alert>> {
        let fields = encode(&patch)?;
        match self.repo.update_document(ALERTS_COLLECTION, id, fields).await {
            Ok(()) => self.get_by_id(id).await,
            Err(ApiError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        if self.get_by_id(id).await?.is_none() {
            return Ok(false);
        }
        self.repo.delete_document(ALERTS_COLLECTION, id).await?;
        Ok(true)
    }
}

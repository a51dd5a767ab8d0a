//! In-memory document store
//!
//! Backs the repository trait with nested maps. Collections use a
//! `BTreeMap` so listings come back in a stable order.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ApiError, Result};

use super::DocumentRepository;

// == Memory Repository ==
/// Process-local `DocumentRepository` implementation.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    collections: RwLock<HashMap<String, BTreeMap<String, Value>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentRepository for MemoryRepository {
    async fn create_document(
        &self,
        collection: &str,
        mut data: Value,
        id: Option<String>,
    ) -> Result<String> {
        let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());

        // Stored documents always carry their own id
        match data.as_object_mut() {
            Some(obj) => {
                obj.insert("id".to_string(), Value::String(id.clone()));
            }
            None => {
                return Err(ApiError::Persistence(format!(
                    "Document for collection '{}' is not a JSON object",
                    collection
                )))
            }
        }

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), data);

        Ok(id)
    }

    async fn get_documents(&self, collection: &str) -> Result<Vec<Value>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn get_document_by_id(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn update_document(&self, collection: &str, id: &str, patch: Value) -> Result<()> {
        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| ApiError::NotFound("Document".to_string()))?;

        let (Some(target), Some(fields)) = (doc.as_object_mut(), patch.as_object()) else {
            return Err(ApiError::Persistence(format!(
                "Malformed update for '{}/{}'",
                collection, id
            )));
        };

        // Field-level merge; the id is not patchable
        for (field, value) in fields {
            if field != "id" {
                target.insert(field.clone(), value.clone());
            }
        }

        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<()> {
        let mut collections = self.collections.write().await;
        let removed = collections
            .get_mut(collection)
            .and_then(|docs| docs.remove(id));

        match removed {
            Some(_) => Ok(()),
            None => Err(ApiError::NotFound("Document".to_string())),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_generates_id() {
        let repo = MemoryRepository::new();

        let id = repo
            .create_document("forecasts", json!({"temperature": 20.0}), None)
            .await
            .unwrap();

        assert!(!id.is_empty());
        let doc = repo
            .get_document_by_id("forecasts", &id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(doc["id"], id);
        assert_eq!(doc["temperature"], 20.0);
    }

    #[tokio::test]
    async fn test_create_honors_supplied_id() {
        let repo = MemoryRepository::new();

        let id = repo
            .create_document("forecasts", json!({"temperature": 20.0}), Some("f1".into()))
            .await
            .unwrap();

        assert_eq!(id, "f1");
    }

    #[tokio::test]
    async fn test_get_documents_empty_collection() {
        let repo = MemoryRepository::new();
        assert!(repo.get_documents("forecasts").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let repo = MemoryRepository::new();
        repo.create_document(
            "forecasts",
            json!({"temperature": 20.0, "humidity": 40.0}),
            Some("f1".into()),
        )
        .await
        .unwrap();

        repo.update_document("forecasts", "f1", json!({"temperature": 25.0}))
            .await
            .unwrap();

        let doc = repo
            .get_document_by_id("forecasts", "f1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(doc["temperature"], 25.0);
        assert_eq!(doc["humidity"], 40.0, "untouched fields survive the merge");
        assert_eq!(doc["id"], "f1");
    }

    #[tokio::test]
    async fn test_update_cannot_overwrite_id() {
        let repo = MemoryRepository::new();
        repo.create_document("forecasts", json!({"temperature": 20.0}), Some("f1".into()))
            .await
            .unwrap();

        repo.update_document("forecasts", "f1", json!({"id": "evil"}))
            .await
            .unwrap();

        let doc = repo
            .get_document_by_id("forecasts", "f1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(doc["id"], "f1");
    }

    #[tokio::test]
    async fn test_update_missing_document() {
        let repo = MemoryRepository::new();

        let result = repo
            .update_document("forecasts", "ghost", json!({"temperature": 1.0}))
            .await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_document() {
        let repo = MemoryRepository::new();
        repo.create_document("alerts", json!({"description": "storm"}), Some("a1".into()))
            .await
            .unwrap();

        repo.delete_document("alerts", "a1").await.unwrap();

        assert!(repo
            .get_document_by_id("alerts", "a1")
            .await
            .unwrap()
            .is_none());
        assert!(matches!(
            repo.delete_document("alerts", "a1").await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let repo = MemoryRepository::new();
        repo.create_document("forecasts", json!({"x": 1}), Some("shared".into()))
            .await
            .unwrap();

        assert!(repo
            .get_document_by_id("alerts", "shared")
            .await
            .unwrap()
            .is_none());
    }
}

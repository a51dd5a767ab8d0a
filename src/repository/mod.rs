//! Document Repository
//!
//! Persistence seam for the services. Documents are untyped JSON values
//! grouped into named collections and keyed by string id, mirroring a
//! hosted document database; the services serialize domain models at
//! this boundary.

mod memory;

pub use memory::MemoryRepository;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

// == Document Repository Trait ==
/// Object-safe interface over a document store.
///
/// Methods are deliberately non-generic (JSON in, JSON out) so services
/// can hold an `Arc<dyn DocumentRepository>` and tests can substitute
/// instrumented doubles.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Stores a new document, generating an id when none is supplied.
    /// Returns the id the document was stored under.
    async fn create_document(
        &self,
        collection: &str,
        data: Value,
        id: Option<String>,
    ) -> Result<String>;

    /// Returns every document in the collection.
    async fn get_documents(&self, collection: &str) -> Result<Vec<Value>>;

    /// Returns the document with the given id, or `None`.
    async fn get_document_by_id(&self, collection: &str, id: &str) -> Result<Option<Value>>;

    /// Merges the fields of `patch` into an existing document.
    /// Fails with `NotFound` when the document does not exist.
    async fn update_document(&self, collection: &str, id: &str, patch: Value) -> Result<()>;

    /// Removes a document. Fails with `NotFound` when absent.
    async fn delete_document(&self, collection: &str, id: &str) -> Result<()>;
}

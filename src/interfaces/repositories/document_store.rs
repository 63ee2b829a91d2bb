use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::StoreError;

/// A schemaless record. The store enforces no shape on it.
pub type Document = Map<String, Value>;

/// A document together with the id the store assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub data: Document,
}

impl StoredDocument {
    pub fn new(id: impl Into<String>, data: Document) -> Self {
        StoredDocument { id: id.into(), data }
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Appends a document to the named collection and returns its new id
    async fn add_document(&self, collection: &str, document: Document) -> Result<String, StoreError>;

    /// Returns every document in the collection, in the order the store yields them
    async fn fetch_all_documents(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError>;

    /// Cheap round trip against `collection`, used by health checks
    async fn check_connection(&self, collection: &str) -> Result<(), StoreError>;
}

#[async_trait]
impl<T> DocumentStore for Arc<T>
where
    T: DocumentStore + ?Sized,
{
    async fn add_document(&self, collection: &str, document: Document) -> Result<String, StoreError> {
        (**self).add_document(collection, document).await
    }

    async fn fetch_all_documents(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        (**self).fetch_all_documents(collection).await
    }

    async fn check_connection(&self, collection: &str) -> Result<(), StoreError> {
        (**self).check_connection(collection).await
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::{
    errors::StoreError,
    repositories::document_store::{Document, DocumentStore, StoredDocument},
};

/// Process-local document store. Collections keep insertion order.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<DashMap<String, Vec<StoredDocument>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a collection with documents as-is, ids included
    pub fn with_documents(self, collection: &str, documents: Vec<StoredDocument>) -> Self {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .extend(documents);
        self
    }

    pub fn len(&self, collection: &str) -> usize {
        self.collections.get(collection).map_or(0, |docs| docs.len())
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn add_document(&self, collection: &str, document: Document) -> Result<String, StoreError> {
        let id = Uuid::new_v4().simple().to_string();

        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument::new(id.clone(), document));

        Ok(id)
    }

    async fn fetch_all_documents(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        Ok(self.collections
            .get(collection)
            .map(|docs| docs.value().clone())
            .unwrap_or_default())
    }

    async fn check_connection(&self, _collection: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

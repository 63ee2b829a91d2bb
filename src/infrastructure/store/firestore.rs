use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::{
    errors::StoreError,
    infrastructure::store::firestore_value::{decode_fields, encode_fields},
    repositories::document_store::{Document, DocumentStore, StoredDocument},
    settings::AppConfig,
};

const DEFAULT_DATABASE: &str = "(default)";
const PAGE_SIZE: u32 = 300;

/// Hosted document store reached through the Firestore REST API.
#[derive(Clone)]
pub struct FirestoreDocumentStore {
    client: Client,
    base_url: String,
    project_id: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<FirestoreDocument>,
    next_page_token: Option<String>,
}

impl FirestoreDocumentStore {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        project_id: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        FirestoreDocumentStore {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            api_key,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, StoreError> {
        let project_id = config.firestore_project_id.clone()
            .ok_or_else(|| StoreError::Connection("Firestore project id is not configured".to_string()))?;

        Ok(Self::new(
            Client::new(),
            config.firestore_base_url.clone(),
            project_id,
            config.firestore_api_key.clone(),
        ))
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents/{}",
            self.base_url, self.project_id, DEFAULT_DATABASE, collection
        )
    }

    fn with_key(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }

    async fn ensure_success(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Remote { status: status.as_u16(), body })
    }
}

/// The document id is the last segment of its resource name.
fn document_id(name: &str) -> String {
    name.rsplit('/').next().unwrap_or(name).to_string()
}

#[async_trait]
impl DocumentStore for FirestoreDocumentStore {
    async fn add_document(&self, collection: &str, document: Document) -> Result<String, StoreError> {
        let request = self.client
            .post(self.collection_url(collection))
            .json(&json!({ "fields": encode_fields(&document) }));

        let response = self.with_key(request).send().await?;
        let created: FirestoreDocument = Self::ensure_success(response).await?.json().await?;

        Ok(document_id(&created.name))
    }

    async fn fetch_all_documents(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.client
                .get(self.collection_url(collection))
                .query(&[("pageSize", PAGE_SIZE.to_string())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let response = self.with_key(request).send().await?;
            let page: ListDocumentsResponse = Self::ensure_success(response).await?.json().await?;

            for doc in page.documents {
                let data = decode_fields(&doc.fields)?;
                documents.push(StoredDocument::new(document_id(&doc.name), data));
            }

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(documents)
    }

    async fn check_connection(&self, collection: &str) -> Result<(), StoreError> {
        // Reads the collection the service serves, so security rules apply as they do for listing.
        let request = self.client
            .get(self.collection_url(collection))
            .query(&[("pageSize", "1")]);

        let response = self.with_key(request).send().await?;
        Self::ensure_success(response).await.map(|_| ())
    }
}

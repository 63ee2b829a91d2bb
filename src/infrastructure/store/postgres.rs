use async_trait::async_trait;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::{
    errors::StoreError,
    repositories::document_store::{Document, DocumentStore, StoredDocument},
};

/// Documents kept as JSONB rows in a single `documents` table, keyed by collection.
#[derive(Clone)]
pub struct PgDocumentStore {
    pub pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        PgDocumentStore { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn add_document(&self, collection: &str, document: Document) -> Result<String, StoreError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO documents (id, collection, data)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(collection)
        .bind(Json(document))
        .fetch_one(&self.pool)
        .await?;

        Ok(id.to_string())
    }

    async fn fetch_all_documents(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let rows = sqlx::query_as::<_, (Uuid, Json<Document>)>(
            r#"SELECT id, data FROM documents WHERE collection = $1 ORDER BY seq"#,
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, Json(data))| StoredDocument::new(id.to_string(), data))
            .collect())
    }

    async fn check_connection(&self, _collection: &str) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(StoreError::from)
    }
}

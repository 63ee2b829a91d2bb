use std::sync::Arc;

use anyhow::Context;

use crate::{
    db::postgres::{create_pool, run_migrations},
    repositories::document_store::DocumentStore,
    settings::{AppConfig, StoreBackend},
};

pub mod firestore;
pub mod firestore_value;
pub mod memory;
pub mod postgres;

use firestore::FirestoreDocumentStore;
use memory::InMemoryDocumentStore;
use postgres::PgDocumentStore;

/// Builds the document store selected by `store_backend`.
pub async fn connect(config: &AppConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
    let store: Arc<dyn DocumentStore> = match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory document store; postings are lost on restart");
            Arc::new(InMemoryDocumentStore::new())
        }
        StoreBackend::Postgres => {
            let database_url = config.database_url.as_deref()
                .context("DATABASE_URL must be set for the postgres store")?;
            let pool = create_pool(database_url)
                .await
                .context("Failed to create database connection pool")?;
            run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            Arc::new(PgDocumentStore::new(pool))
        }
        StoreBackend::Firestore => {
            let store = FirestoreDocumentStore::from_config(config)
                .context("Failed to configure the Firestore store")?;
            Arc::new(store)
        }
    };

    Ok(store)
}

use tracing::instrument;
use validator::Validate;

use crate::{
    entities::job_posting::{JobForm, JobPosting, NewJobResponse},
    errors::{AppError, StoreOperation},
    repositories::document_store::DocumentStore,
};

#[derive(Clone)]
pub struct JobBoard<S>
where
    S: DocumentStore,
{
    pub store: S,
    collection: String,
}

impl<S> JobBoard<S>
where
    S: DocumentStore,
{
    pub fn new(store: S, collection: impl Into<String>) -> Self {
        JobBoard {
            store,
            collection: collection.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Validates the form and appends one posting owned by `owner`
    #[instrument(skip(self, form), fields(collection = %self.collection))]
    pub async fn create_job(
        &self,
        form: &JobForm,
        owner: Option<String>,
    ) -> Result<NewJobResponse, AppError> {
        form.validate()?;

        let document = form.to_document(owner.as_deref());

        let id = self.store
            .add_document(&self.collection, document)
            .await
            .map_err(|e| {
                tracing::error!("Failed to add job posting: {}", e);
                AppError::StoreUnavailable { operation: StoreOperation::Create, source: e }
            })?;

        tracing::info!(job_id = %id, "Job posting created");
        Ok(NewJobResponse {
            id,
            message: "Job created successfully".to_string(),
        })
    }

    /// Lists every posting in the collection, unfiltered
    #[instrument(skip(self), fields(collection = %self.collection))]
    pub async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        let documents = self.store
            .fetch_all_documents(&self.collection)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch job postings: {}", e);
                AppError::StoreUnavailable { operation: StoreOperation::Fetch, source: e }
            })?;

        Ok(documents.into_iter().map(JobPosting::from).collect())
    }

    pub async fn check_store(&self) -> Result<(), AppError> {
        self.store
            .check_connection(&self.collection)
            .await
            .map_err(|e| AppError::StoreUnavailable { operation: StoreOperation::HealthCheck, source: e })
    }
}

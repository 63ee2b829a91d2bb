use async_trait::async_trait;
use job_board::{
    entities::job_posting::JobForm,
    errors::StoreError,
    repositories::document_store::{Document, DocumentStore, StoredDocument},
};
use mockall::mock;
use serde_json::json;

mock! {
    pub Store {}

    #[async_trait]
    impl DocumentStore for Store {
        async fn add_document(&self, collection: &str, document: Document) -> Result<String, StoreError>;
        async fn fetch_all_documents(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError>;
        async fn check_connection(&self, collection: &str) -> Result<(), StoreError>;
    }
}

/// The documented example: job type and other requirements left blank.
#[allow(dead_code)]
pub fn engineer_form() -> JobForm {
    JobForm {
        job_title: "Engineer".to_string(),
        job_description: "Build things".to_string(),
        qualification: "BS".to_string(),
        skill_set: "Go".to_string(),
        other_requirements: String::new(),
        job_type: String::new(),
        salary_range: "100k".to_string(),
        address: "Remote".to_string(),
    }
}

#[allow(dead_code)]
pub fn full_form() -> JobForm {
    JobForm {
        other_requirements: "On-call rotation".to_string(),
        job_type: "full time".to_string(),
        ..engineer_form()
    }
}

#[allow(dead_code)]
pub fn stored_job(id: &str, title: &str) -> StoredDocument {
    let data = json!({
        "jobTitle": title,
        "jobDescription": format!("{} description", title),
        "qualification": "BS",
        "skillSet": "Rust",
        "otherRequirements": "",
        "jobType": "contract",
        "salaryRange": "90k",
        "address": "Lagos",
        "uid": "owner-1"
    });

    StoredDocument::new(id, data.as_object().cloned().unwrap_or_default())
}

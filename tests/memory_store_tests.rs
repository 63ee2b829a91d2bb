use job_board::{
    repositories::document_store::DocumentStore,
    store::memory::InMemoryDocumentStore,
};
use serde_json::json;

#[tokio::test]
async fn documents_come_back_in_insertion_order_per_collection() {
    let store = InMemoryDocumentStore::new();

    let first = store
        .add_document("jobs", json!({ "jobTitle": "One" }).as_object().cloned().unwrap())
        .await
        .unwrap();
    let second = store
        .add_document("jobs", json!({ "jobTitle": "Two" }).as_object().cloned().unwrap())
        .await
        .unwrap();
    store
        .add_document("drafts", json!({ "jobTitle": "Other" }).as_object().cloned().unwrap())
        .await
        .unwrap();

    let jobs = store.fetch_all_documents("jobs").await.unwrap();
    let ids: Vec<_> = jobs.iter().map(|doc| doc.id.clone()).collect();

    assert_ne!(first, second);
    assert_eq!(ids, vec![first, second]);
    assert_eq!(store.len("drafts"), 1);
}

#[tokio::test]
async fn unknown_collection_is_empty() {
    let store = InMemoryDocumentStore::new();

    assert!(store.fetch_all_documents("missing").await.unwrap().is_empty());
    assert!(store.is_empty("missing"));
    assert!(store.check_connection("jobs").await.is_ok());
}

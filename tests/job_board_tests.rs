mod test_fixtures;

use job_board::{
    constants::{CREATE_FAILED_MESSAGE, FETCH_FAILED_MESSAGE, VALIDATION_MESSAGE},
    entities::job_posting::{JobField, JobForm},
    errors::{AppError, StoreError, StoreOperation},
    repositories::document_store::StoredDocument,
    use_cases::jobs::JobBoard,
};
use serde_json::{json, Value};
use test_fixtures::*;

const REQUIRED_FIELDS: [JobField; 6] = [
    JobField::JobTitle,
    JobField::JobDescription,
    JobField::Qualification,
    JobField::SkillSet,
    JobField::SalaryRange,
    JobField::Address,
];

#[tokio::test]
async fn create_rejects_each_missing_required_field_without_writing() {
    for field in REQUIRED_FIELDS {
        let mut store = MockStore::new();
        store.expect_add_document().never();

        let board = JobBoard::new(store, "jobs");
        let form = full_form().with(field, "");

        let result = board.create_job(&form, Some("user-1".to_string())).await;

        match result {
            Err(e @ AppError::ValidationError(_)) => {
                assert_eq!(e.user_message(), VALIDATION_MESSAGE);
                if let AppError::ValidationError(details) = e {
                    assert_eq!(details.len(), 1, "only {:?} should be reported", field);
                }
            }
            other => panic!("expected a validation error for {:?}, got {:?}", field, other),
        }
    }
}

#[tokio::test]
async fn create_reports_every_empty_required_field() {
    let mut store = MockStore::new();
    store.expect_add_document().never();

    let board = JobBoard::new(store, "jobs");
    let result = board.create_job(&JobForm::default(), None).await;

    match result {
        Err(AppError::ValidationError(details)) => assert_eq!(details.len(), 6),
        other => panic!("expected a validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn optional_fields_may_be_empty() {
    let mut store = MockStore::new();
    store.expect_add_document()
        .withf(|collection, document| {
            collection == "jobs"
                && document.get("jobType") == Some(&json!(""))
                && document.get("otherRequirements") == Some(&json!(""))
        })
        .times(1)
        .returning(|_, _| Ok("doc-1".to_string()));

    let board = JobBoard::new(store, "jobs");
    let response = board
        .create_job(&engineer_form(), Some("user-1".to_string()))
        .await
        .expect("create should succeed");

    assert_eq!(response.id, "doc-1");
}

#[tokio::test]
async fn create_writes_all_fields_and_owner_once() {
    let mut store = MockStore::new();
    store.expect_add_document()
        .times(1)
        .returning(|collection, document| {
            assert_eq!(collection, "postings");
            let expected = json!({
                "jobTitle": "Engineer",
                "jobDescription": "Build things",
                "qualification": "BS",
                "skillSet": "Go",
                "otherRequirements": "On-call rotation",
                "jobType": "full time",
                "salaryRange": "100k",
                "address": "Remote",
                "uid": "user-42"
            });
            assert_eq!(Value::Object(document), expected);
            Ok("doc-42".to_string())
        });

    let board = JobBoard::new(store, "postings");
    let response = board
        .create_job(&full_form(), Some("user-42".to_string()))
        .await
        .expect("create should succeed");

    assert_eq!(response.id, "doc-42");
}

#[tokio::test]
async fn anonymous_create_omits_owner() {
    let mut store = MockStore::new();
    store.expect_add_document()
        .withf(|_, document| !document.contains_key("uid") && document.len() == 8)
        .times(1)
        .returning(|_, _| Ok("doc-2".to_string()));

    let board = JobBoard::new(store, "jobs");
    let result = board.create_job(&engineer_form(), None).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn whitespace_counts_as_filled() {
    let mut store = MockStore::new();
    store.expect_add_document()
        .times(1)
        .returning(|_, _| Ok("doc-3".to_string()));

    let board = JobBoard::new(store, "jobs");
    let form = engineer_form().with(JobField::Address, " ");

    assert!(board.create_job(&form, None).await.is_ok());
}

#[tokio::test]
async fn store_failure_on_create_hides_the_cause() {
    let mut store = MockStore::new();
    store.expect_add_document()
        .times(1)
        .returning(|_, _| Err(StoreError::Connection("socket closed".to_string())));

    let board = JobBoard::new(store, "jobs");
    let err = board
        .create_job(&engineer_form(), None)
        .await
        .expect_err("create should fail");

    assert!(matches!(
        err,
        AppError::StoreUnavailable { operation: StoreOperation::Create, .. }
    ));
    assert_eq!(err.user_message(), CREATE_FAILED_MESSAGE);
    assert!(!err.user_message().contains("socket"));
}

#[tokio::test]
async fn list_returns_postings_in_store_order() {
    let mut store = MockStore::new();
    store.expect_fetch_all_documents()
        .withf(|collection| collection == "jobs")
        .times(1)
        .returning(|_| Ok(vec![
            stored_job("b", "Second"),
            stored_job("a", "First"),
        ]));

    let board = JobBoard::new(store, "jobs");
    let postings = board.list_jobs().await.expect("list should succeed");

    let titles: Vec<_> = postings.iter().map(|p| p.job_title.clone()).collect();
    assert_eq!(titles, vec![Some("Second".to_string()), Some("First".to_string())]);
    assert_eq!(postings[0].id, "b");
    assert_eq!(postings[0].uid.as_deref(), Some("owner-1"));
}

#[tokio::test]
async fn list_tolerates_missing_and_odd_fields() {
    let mut store = MockStore::new();
    store.expect_fetch_all_documents()
        .times(1)
        .returning(|_| {
            let data = json!({ "jobTitle": "Sparse", "salaryRange": 120000, "address": null });
            Ok(vec![StoredDocument::new("x", data.as_object().cloned().unwrap_or_default())])
        });

    let board = JobBoard::new(store, "jobs");
    let postings = board.list_jobs().await.expect("list should succeed");

    assert_eq!(postings.len(), 1);
    let posting = &postings[0];
    assert_eq!(posting.job_title.as_deref(), Some("Sparse"));
    assert_eq!(posting.salary_range.as_deref(), Some("120000"));
    assert_eq!(posting.address, None);
    assert_eq!(posting.job_description, None);
    assert_eq!(posting.uid, None);
}

#[tokio::test]
async fn store_failure_on_list_uses_fetch_message() {
    let mut store = MockStore::new();
    store.expect_fetch_all_documents()
        .times(1)
        .returning(|_| Err(StoreError::Remote { status: 503, body: "unavailable".to_string() }));

    let board = JobBoard::new(store, "jobs");
    let err = board.list_jobs().await.expect_err("list should fail");

    assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
}

#[tokio::test]
async fn store_check_targets_the_served_collection() {
    let mut store = MockStore::new();
    store.expect_check_connection()
        .withf(|collection| collection == "postings")
        .times(1)
        .returning(|_| Ok(()));

    let board = JobBoard::new(store, "postings");

    assert!(board.check_store().await.is_ok());
}

#[test]
fn null_form_values_read_as_empty() {
    let form: JobForm = serde_json::from_value(json!({
        "jobTitle": null,
        "jobType": null,
        "address": "Remote"
    }))
    .expect("nulls are accepted");

    assert_eq!(form.job_title, "");
    assert_eq!(form.job_type, "");
    assert_eq!(form.address, "Remote");
    assert_eq!(form.qualification, "");
}

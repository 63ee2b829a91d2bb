use job_board::{
    errors::StoreError,
    entities::job_posting::JobPosting,
    repositories::document_store::StoredDocument,
    store::firestore_value::{decode_fields, decode_value, encode_fields},
};
use serde_json::{json, Value};

#[test]
fn decodes_a_listed_job_document() {
    let fields = json!({
        "jobTitle": { "stringValue": "Engineer" },
        "salaryRange": { "integerValue": "100000" },
        "remote": { "booleanValue": true },
        "uid": { "nullValue": null },
        "tags": { "arrayValue": { "values": [ { "stringValue": "rust" }, { "doubleValue": 1.5 } ] } },
        "office": { "mapValue": { "fields": { "city": { "stringValue": "Lagos" } } } },
        "postedAt": { "timestampValue": "2024-05-01T10:00:00Z" }
    });

    let document = decode_fields(fields.as_object().unwrap()).expect("decodes");

    assert_eq!(Value::Object(document.clone()), json!({
        "jobTitle": "Engineer",
        "salaryRange": 100000,
        "remote": true,
        "uid": null,
        "tags": ["rust", 1.5],
        "office": { "city": "Lagos" },
        "postedAt": "2024-05-01T10:00:00Z"
    }));

    let posting = JobPosting::from(StoredDocument::new("abc", document));
    assert_eq!(posting.job_title.as_deref(), Some("Engineer"));
    assert_eq!(posting.salary_range.as_deref(), Some("100000"));
    assert_eq!(posting.uid, None);
}

#[test]
fn empty_array_and_map_values_decode_to_empty_containers() {
    assert_eq!(decode_value(&json!({ "arrayValue": {} })).unwrap(), json!([]));
    assert_eq!(decode_value(&json!({ "mapValue": {} })).unwrap(), json!({}));
}

#[test]
fn encodes_job_fields_as_typed_values() {
    let document = json!({
        "jobTitle": "Engineer",
        "openings": 3,
        "score": 4.5,
        "meta": { "featured": false }
    });

    let encoded = encode_fields(document.as_object().unwrap());

    assert_eq!(Value::Object(encoded), json!({
        "jobTitle": { "stringValue": "Engineer" },
        "openings": { "integerValue": "3" },
        "score": { "doubleValue": 4.5 },
        "meta": { "mapValue": { "fields": { "featured": { "booleanValue": false } } } }
    }));
}

#[test]
fn rejects_malformed_values() {
    assert!(matches!(
        decode_value(&json!({ "integerValue": "twelve" })),
        Err(StoreError::Decode(_))
    ));
    assert!(matches!(decode_value(&json!("bare")), Err(StoreError::Decode(_))));
    assert!(matches!(
        decode_value(&json!({ "vectorValue": {} })),
        Err(StoreError::Decode(_))
    ));
}

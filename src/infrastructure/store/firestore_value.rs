//! Conversion between plain JSON documents and Firestore's typed `Value` encoding.

use serde_json::{json, Map, Number, Value};

use crate::{errors::StoreError, repositories::document_store::Document};

/// Encodes a plain document as a Firestore `fields` map.
pub fn encode_fields(document: &Document) -> Map<String, Value> {
    document
        .iter()
        .map(|(key, value)| (key.clone(), encode_value(value)))
        .collect()
}

pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n.as_f64() }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => json!({
            "arrayValue": { "values": items.iter().map(encode_value).collect::<Vec<_>>() }
        }),
        Value::Object(fields) => json!({
            "mapValue": { "fields": encode_fields(fields) }
        }),
    }
}

/// Decodes a Firestore `fields` map back into a plain document.
pub fn decode_fields(fields: &Map<String, Value>) -> Result<Document, StoreError> {
    fields
        .iter()
        .map(|(key, value)| Ok((key.clone(), decode_value(value)?)))
        .collect()
}

pub fn decode_value(value: &Value) -> Result<Value, StoreError> {
    let typed = value
        .as_object()
        .and_then(|obj| obj.iter().next())
        .map(|(kind, inner)| (kind.as_str(), inner))
        .ok_or_else(|| StoreError::Decode(format!("Malformed Firestore value: {}", value)))?;

    match typed {
        ("nullValue", _) => Ok(Value::Null),
        ("booleanValue", Value::Bool(b)) => Ok(Value::Bool(*b)),
        ("integerValue", Value::String(s)) => s
            .parse::<i64>()
            .map(|i| Value::Number(i.into()))
            .map_err(|e| StoreError::Decode(format!("Invalid integerValue {:?}: {}", s, e))),
        ("integerValue", Value::Number(n)) => Ok(Value::Number(n.clone())),
        ("doubleValue", Value::Number(n)) => Ok(Value::Number(n.clone())),
        ("doubleValue", Value::String(s)) => decode_special_double(s),
        ("stringValue", Value::String(s))
        | ("timestampValue", Value::String(s))
        | ("referenceValue", Value::String(s))
        | ("bytesValue", Value::String(s)) => Ok(Value::String(s.clone())),
        ("geoPointValue", Value::Object(point)) => Ok(Value::Object(point.clone())),
        ("arrayValue", Value::Object(array)) => {
            let values = match array.get("values") {
                Some(Value::Array(items)) => items
                    .iter()
                    .map(decode_value)
                    .collect::<Result<Vec<_>, _>>()?,
                _ => Vec::new(),
            };
            Ok(Value::Array(values))
        }
        ("mapValue", Value::Object(map)) => match map.get("fields") {
            Some(Value::Object(fields)) => decode_fields(fields).map(Value::Object),
            _ => Ok(Value::Object(Map::new())),
        },
        (kind, _) => Err(StoreError::Decode(format!("Unsupported Firestore value type: {}", kind))),
    }
}

// NaN and the infinities arrive as strings and have no JSON number form.
fn decode_special_double(s: &str) -> Result<Value, StoreError> {
    match s.parse::<f64>() {
        Ok(f) => Ok(Number::from_f64(f).map_or(Value::Null, Value::Number)),
        Err(e) => Err(StoreError::Decode(format!("Invalid doubleValue {:?}: {}", s, e))),
    }
}

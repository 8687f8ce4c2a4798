//! JSON ingestion of people and emails.
//!
//! Supported inputs:
//! - A JSON array: `[{"name":"Ada","age":36}, ...]` or `["a@x.com", null, ...]`
//! - A single JSON object (one person / one email record)
//! - Newline-delimited JSON (NDJSON), one item per line
//!
//! A document that is exactly `null` is an absent sequence and is rejected with
//! [`TransformError::InvalidArgument`].

use std::fs;
use std::path::Path;

use crate::error::{TransformError, TransformResult};
use crate::types::Person;

/// Read people from a JSON file.
pub fn read_people_json_from_path(path: impl AsRef<Path>) -> TransformResult<Vec<Person>> {
    let text = fs::read_to_string(path)?;
    read_people_json_from_str(&text)
}

/// Read people from an in-memory JSON string.
///
/// Each item must be an object with a string `name` and an integer `age`.
pub fn read_people_json_from_str(input: &str) -> TransformResult<Vec<Person>> {
    let values = parse_json_items(input, "people")?;
    values
        .iter()
        .enumerate()
        .map(|(idx0, v)| person_from_json(idx0 + 1, v))
        .collect()
}

/// Read emails from a JSON file.
pub fn read_emails_json_from_path(path: impl AsRef<Path>) -> TransformResult<Vec<Option<String>>> {
    let text = fs::read_to_string(path)?;
    read_emails_json_from_str(&text)
}

/// Read emails from an in-memory JSON string.
///
/// Items may be strings, `null` (absent email) or objects with an `email` field.
pub fn read_emails_json_from_str(input: &str) -> TransformResult<Vec<Option<String>>> {
    let values = parse_json_items(input, "emails")?;
    values
        .iter()
        .enumerate()
        .map(|(idx0, v)| email_from_json(idx0 + 1, v))
        .collect()
}

fn parse_json_items(input: &str, what: &str) -> TransformResult<Vec<serde_json::Value>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TransformError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array, object or null).
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return match v {
            serde_json::Value::Null => Err(TransformError::invalid_argument(format!(
                "{what} sequence is null"
            ))),
            serde_json::Value::Array(items) => Ok(items),
            v @ (serde_json::Value::Object(_) | serde_json::Value::String(_)) => Ok(vec![v]),
            _ => Err(TransformError::SchemaMismatch {
                message: format!("json for {what} must be an array, an object, or NDJSON"),
            }),
        };
    }

    // Fall back to NDJSON.
    let mut values = Vec::new();
    for (i, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
            TransformError::SchemaMismatch {
                message: format!("invalid ndjson at line {}: {}", i + 1, e),
            }
        })?;
        values.push(v);
    }
    Ok(values)
}

fn person_from_json(row: usize, v: &serde_json::Value) -> TransformResult<Person> {
    let obj = v.as_object().ok_or_else(|| TransformError::SchemaMismatch {
        message: format!("row {row} is not a json object"),
    })?;

    let name_value = obj.get("name").ok_or_else(|| missing_field(row, "name"))?;
    let name = name_value
        .as_str()
        .ok_or_else(|| parse_error(row, "name", name_value, "expected string"))?;

    let age_value = obj.get("age").ok_or_else(|| missing_field(row, "age"))?;
    let age = match (age_value.as_i64(), age_value.as_u64()) {
        (Some(n), _) => n,
        (None, Some(_)) => {
            return Err(parse_error(row, "age", age_value, "u64 out of range for i64"));
        }
        (None, None) => {
            return Err(parse_error(row, "age", age_value, "expected integer number"));
        }
    };

    Ok(Person::new(name, age))
}

fn email_from_json(row: usize, v: &serde_json::Value) -> TransformResult<Option<String>> {
    let v = match v.as_object() {
        Some(obj) => obj.get("email").ok_or_else(|| missing_field(row, "email"))?,
        None => v,
    };
    match v {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s.clone())),
        other => Err(parse_error(row, "email", other, "expected string or null")),
    }
}

fn missing_field(row: usize, field: &str) -> TransformError {
    TransformError::SchemaMismatch {
        message: format!("row {row} missing required field '{field}'"),
    }
}

fn parse_error(row: usize, column: &str, v: &serde_json::Value, message: &str) -> TransformError {
    TransformError::ParseError {
        row,
        column: column.to_string(),
        raw: v.to_string(),
        message: message.to_string(),
    }
}

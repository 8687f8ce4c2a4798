//! CSV ingestion of people and emails.

use std::path::Path;

use csv::StringRecord;

use crate::error::{TransformError, TransformResult};
use crate::types::Person;

/// Read people from a CSV file.
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain `name` and `age` (order can differ, extra columns are ignored).
/// - `age` must be an integer on every row.
pub fn read_people_csv_from_path(path: impl AsRef<Path>) -> TransformResult<Vec<Person>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    read_people_csv_from_reader(&mut rdr)
}

/// Read people from an existing CSV reader.
pub fn read_people_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> TransformResult<Vec<Person>> {
    let headers = rdr.headers()?.clone();
    let name_idx = column_index(&headers, "name")?;
    let age_idx = column_index(&headers, "age")?;

    let mut people = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // 1-based, and the header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let name = record.get(name_idx).unwrap_or("").trim();
        let raw_age = record.get(age_idx).unwrap_or("");
        let age = raw_age
            .trim()
            .parse::<i64>()
            .map_err(|e| TransformError::ParseError {
                row: user_row,
                column: "age".to_string(),
                raw: raw_age.to_owned(),
                message: e.to_string(),
            })?;
        people.push(Person::new(name, age));
    }

    Ok(people)
}

/// Read emails from a CSV file with an `email` column.
pub fn read_emails_csv_from_path(path: impl AsRef<Path>) -> TransformResult<Vec<Option<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    read_emails_csv_from_reader(&mut rdr)
}

/// Read emails from an existing CSV reader.
///
/// Empty cells become `None`.
pub fn read_emails_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> TransformResult<Vec<Option<String>>> {
    let headers = rdr.headers()?.clone();
    let email_idx = column_index(&headers, "email")?;

    let mut emails = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let email = record
            .get(email_idx)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
        emails.push(email);
    }

    Ok(emails)
}

fn column_index(headers: &StringRecord, column: &str) -> TransformResult<usize> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| TransformError::SchemaMismatch {
            message: format!(
                "missing required column '{column}'. headers={:?}",
                headers.iter().collect::<Vec<_>>()
            ),
        })
}

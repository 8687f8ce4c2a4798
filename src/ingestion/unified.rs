//! Unified, path-based ingestion entrypoints.
//!
//! - If [`IngestionOptions::format`] is `None`, the format is inferred from the file extension.
//! - Loaded row counts are reported through `tracing` at `debug` level.

use std::path::{Path, PathBuf};

use crate::error::{TransformError, TransformResult};
use crate::types::Person;

use super::{csv, json};

/// Supported ingestion formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// JSON array, single object, or NDJSON.
    Json,
}

impl IngestionFormat {
    /// Parse an ingestion format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Options controlling unified ingestion behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestionOptions {
    /// If `None`, auto-detect format from file extension.
    pub format: Option<IngestionFormat>,
}

/// Read people from `path` (`name` and `age` columns/fields).
///
/// ```no_run
/// use collection_transformer::ingestion::{read_people_from_path, IngestionOptions};
/// use collection_transformer::processing::extract_teenagers;
///
/// # fn main() -> Result<(), collection_transformer::TransformError> {
/// let people = read_people_from_path("people.csv", &IngestionOptions::default())?;
/// println!("teenagers={}", extract_teenagers(&people).len());
/// # Ok(())
/// # }
/// ```
pub fn read_people_from_path(
    path: impl AsRef<Path>,
    options: &IngestionOptions,
) -> TransformResult<Vec<Person>> {
    let path = path.as_ref();
    let people = match resolve_format(path, options)? {
        IngestionFormat::Csv => csv::read_people_csv_from_path(path)?,
        IngestionFormat::Json => json::read_people_json_from_path(path)?,
    };
    tracing::debug!(path = %path.display(), rows = people.len(), "loaded people");
    Ok(people)
}

/// Read emails from `path`; absent emails are kept as `None`.
pub fn read_emails_from_path(
    path: impl AsRef<Path>,
    options: &IngestionOptions,
) -> TransformResult<Vec<Option<String>>> {
    let path = path.as_ref();
    let emails = match resolve_format(path, options)? {
        IngestionFormat::Csv => csv::read_emails_csv_from_path(path)?,
        IngestionFormat::Json => json::read_emails_json_from_path(path)?,
    };
    tracing::debug!(path = %path.display(), rows = emails.len(), "loaded emails");
    Ok(emails)
}

fn resolve_format(path: &Path, options: &IngestionOptions) -> TransformResult<IngestionFormat> {
    match options.format {
        Some(f) => Ok(f),
        None => infer_format_from_path(path),
    }
}

fn infer_format_from_path(path: &Path) -> TransformResult<IngestionFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| TransformError::SchemaMismatch {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    IngestionFormat::from_extension(ext).ok_or_else(|| TransformError::SchemaMismatch {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}

/// What an [`IngestionRequest`] loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionTarget {
    People,
    Emails,
}

/// Owned ingestion job, useful when loading is queued separately from transforming.
#[derive(Debug, Clone)]
pub struct IngestionRequest {
    pub path: PathBuf,
    pub target: IngestionTarget,
    pub options: IngestionOptions,
}

/// Data loaded by an [`IngestionRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ingested {
    People(Vec<Person>),
    Emails(Vec<Option<String>>),
}

impl IngestionRequest {
    /// Execute the request with [`read_people_from_path`] or [`read_emails_from_path`].
    pub fn run(&self) -> TransformResult<Ingested> {
        match self.target {
            IngestionTarget::People => {
                read_people_from_path(&self.path, &self.options).map(Ingested::People)
            }
            IngestionTarget::Emails => {
                read_emails_from_path(&self.path, &self.options).map(Ingested::Emails)
            }
        }
    }
}

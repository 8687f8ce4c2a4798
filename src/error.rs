use thiserror::Error;

/// Convenience result type for transformation and ingestion operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Error type returned by transformation and ingestion functions.
///
/// This is a single error enum shared across processing, the [`crate::transformer`] boundary and
/// CSV/JSON ingestion.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A required input sequence was absent (e.g. `null` in a request or JSON document).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Two users share the same email while building an email lookup map.
    #[error("duplicate key: email '{email}' appears more than once")]
    DuplicateKey { email: String },

    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON (de)serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not have the expected shape (missing columns/fields, unknown format, ...).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required type.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

impl TransformError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

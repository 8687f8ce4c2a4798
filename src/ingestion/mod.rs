//! Loading people and emails from files or in-memory input.
//!
//! Most callers should use [`read_people_from_path`] / [`read_emails_from_path`] (from
//! [`unified`]), which pick CSV or JSON by file extension unless overridden via
//! [`IngestionOptions`].
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`json`]

pub mod csv;
pub mod json;
pub mod unified;

pub use unified::{
    Ingested, IngestionFormat, IngestionOptions, IngestionRequest, IngestionTarget,
    read_emails_from_path, read_people_from_path,
};

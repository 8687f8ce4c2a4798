//! `collection-transformer` is a small library of in-memory collection transformations over two
//! plain records, [`types::Person`] and [`types::User`].
//!
//! ## What it does
//!
//! - [`processing::extract_teenagers`]: keep people aged 13 to 19 (inclusive), in order
//! - [`processing::create_users`]: one user per distinct, non-null email, in first-seen order
//! - [`processing::group_by_email`]: `email -> user`, failing on duplicate emails
//! - [`processing::group_by_age`]: `age -> people` buckets, each in original order
//! - [`processing::collect_distinct_names`]: `"Distinct names: Harry, Ron, Hermione!"`
//!
//! All operations are synchronous and stateless; inputs are borrowed and never mutated.
//!
//! ## Quick example
//!
//! ```rust
//! use collection_transformer::processing::{collect_distinct_names, extract_teenagers};
//! use collection_transformer::types::Person;
//!
//! let people = vec![
//!     Person::new("Harry", 13),
//!     Person::new("Ron", 13),
//!     Person::new("Hermione", 14),
//!     Person::new("Harry", 13),
//! ];
//!
//! assert_eq!(extract_teenagers(&people).len(), 4);
//! assert_eq!(
//!     collect_distinct_names(&people),
//!     "Distinct names: Harry, Ron, Hermione!"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`types`]: the `Person` / `User` value records
//! - [`processing`]: the transformations as free functions
//! - [`transformer`]: a configurable [`transformer::CollectionTransformer`] with observer hooks,
//!   metrics and a serializable request/response pair
//! - [`ingestion`]: loading people and emails from CSV / JSON
//! - [`error`]: the error type shared by everything above
//!
//! ## Errors
//!
//! - [`TransformError::DuplicateKey`]: two users share an email in `group_by_email`
//! - [`TransformError::InvalidArgument`]: a request or JSON document has a `null`/absent sequence

pub mod error;
pub mod ingestion;
pub mod processing;
pub mod transformer;
pub mod types;

pub use error::{TransformError, TransformResult};

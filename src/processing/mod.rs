//! In-memory collection transformations.
//!
//! Every function here is a stateless, single-pass transformation over a borrowed slice. Inputs
//! are never mutated; each call allocates its own output.
//!
//! Currently implemented:
//!
//! - [`extract_teenagers()`]: keep people aged 13 to 19 (see also [`filter_people()`])
//! - [`create_users()`]: distinct, non-null emails into [`crate::types::User`]s
//! - [`group_by_email()`]: `email -> user` lookup, failing on duplicate emails
//! - [`group_by_age()`]: `age -> people` buckets
//! - [`collect_distinct_names()`]: `"Distinct names: a, b, c!"`
//!
//! ## Example
//!
//! ```rust
//! use collection_transformer::processing::{
//!     collect_distinct_names, create_users, extract_teenagers, group_by_age, group_by_email,
//! };
//! use collection_transformer::types::Person;
//!
//! let people = vec![
//!     Person::new("Harry", 13),
//!     Person::new("Ron", 13),
//!     Person::new("Hermione", 14),
//!     Person::new("Harry", 13),
//!     Person::new("Arthur", 50),
//! ];
//!
//! assert_eq!(extract_teenagers(&people).len(), 4);
//! assert_eq!(group_by_age(&people)[&13].len(), 3);
//! assert_eq!(
//!     collect_distinct_names(&people),
//!     "Distinct names: Harry, Ron, Hermione, Arthur!"
//! );
//!
//! let users = create_users(&[Some("a@x.com"), None, Some("a@x.com"), Some("b@x.com")]);
//! assert_eq!(users.len(), 2);
//! assert!(group_by_email(&users).is_ok());
//! ```

pub mod distinct;
pub mod filter;
pub mod group;
pub mod join;

pub use distinct::{create_users, distinct};
pub use filter::{TEEN_AGES, extract_teenagers, filter_by_age, filter_people};
pub use group::{DuplicateKeyPolicy, group_by_age, group_by_email, group_by_email_with};
pub use join::{Joiner, collect_distinct_names, join_distinct_names};

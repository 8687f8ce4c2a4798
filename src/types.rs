//! Core value records consumed by the transformations.
//!
//! Both records are plain, immutable values: they are built by the caller (or by ingestion),
//! compared by value, and never mutated by [`crate::processing`].

use serde::{Deserialize, Serialize};

/// A person with a name and an age.
///
/// No range is enforced on `age`; range filtering is up to the operation that consumes it
/// (see [`crate::processing::extract_teenagers`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: String,
    age: i64,
}

impl Person {
    /// Create a new person.
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }
}

/// A user identified by a single email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    email: String,
}

impl User {
    /// Create a user from an email address.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl From<String> for User {
    fn from(email: String) -> Self {
        Self::new(email)
    }
}

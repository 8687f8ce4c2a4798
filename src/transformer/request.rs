use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TransformError, TransformResult};
use crate::types::{Person, User};

/// The transformations a [`TransformRequest`] can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    ExtractTeenagers,
    CreateUsers,
    GroupByEmail,
    GroupByAge,
    CollectDistinctNames,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExtractTeenagers => "extract_teenagers",
            Self::CreateUsers => "create_users",
            Self::GroupByEmail => "group_by_email",
            Self::GroupByAge => "group_by_age",
            Self::CollectDistinctNames => "collect_distinct_names",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An owned, serializable description of a single transformation.
///
/// Only the input named by `operation` is read: `people` for the person operations, `emails` for
/// [`Operation::CreateUsers`] and `users` for [`Operation::GroupByEmail`]. A missing or `null`
/// input is rejected with [`TransformError::InvalidArgument`]; it is never treated as empty.
///
/// ```rust
/// use collection_transformer::transformer::{
///     CollectionTransformer, TransformOutput, TransformRequest,
/// };
///
/// # fn main() -> Result<(), collection_transformer::TransformError> {
/// let req = TransformRequest::from_json_str(
///     r#"{"operation":"create_users","emails":[null,"a@x.com","a@x.com","b@x.com"]}"#,
/// )?;
/// let out = CollectionTransformer::default().run(&req)?;
/// assert!(matches!(out, TransformOutput::Users(ref users) if users.len() == 2));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    pub operation: Operation,
    pub people: Option<Vec<Person>>,
    pub emails: Option<Vec<Option<String>>>,
    pub users: Option<Vec<User>>,
}

impl TransformRequest {
    /// A request with no inputs attached.
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            people: None,
            emails: None,
            users: None,
        }
    }

    pub fn with_people(mut self, people: Vec<Person>) -> Self {
        self.people = Some(people);
        self
    }

    pub fn with_emails(mut self, emails: Vec<Option<String>>) -> Self {
        self.emails = Some(emails);
        self
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = Some(users);
        self
    }

    /// Parse a request from JSON.
    pub fn from_json_str(input: &str) -> TransformResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Result of running a [`TransformRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TransformOutput {
    People(Vec<Person>),
    Users(Vec<User>),
    UsersByEmail(BTreeMap<String, User>),
    PeopleByAge(BTreeMap<i64, Vec<Person>>),
    Text(String),
}

impl TransformOutput {
    /// Number of produced items: list length, number of map keys, or 1 for text.
    pub fn len(&self) -> usize {
        match self {
            Self::People(v) => v.len(),
            Self::Users(v) => v.len(),
            Self::UsersByEmail(m) => m.len(),
            Self::PeopleByAge(m) => m.len(),
            Self::Text(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize the output as JSON.
    pub fn to_json_string(&self) -> TransformResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub(crate) fn require<'a, T>(
    input: &'a Option<Vec<T>>,
    operation: Operation,
    field: &str,
) -> TransformResult<&'a [T]> {
    input.as_deref().ok_or_else(|| {
        TransformError::invalid_argument(format!(
            "{operation} requires '{field}', but it was absent"
        ))
    })
}

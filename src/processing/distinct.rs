//! Order-preserving de-duplication and user construction.

use std::collections::HashSet;
use std::hash::Hash;

use crate::types::User;

/// Returns the distinct items of `items`, keeping the first occurrence of each value.
pub fn distinct<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Builds one [`User`] per distinct, present email, in order of first appearance.
///
/// Absent entries (`None`) are dropped and never produce a user. Distinctness is decided by the
/// email text only.
pub fn create_users<S>(emails: &[Option<S>]) -> Vec<User>
where
    S: AsRef<str>,
{
    distinct(emails.iter().flatten().map(|e| e.as_ref()))
        .into_iter()
        .map(User::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{create_users, distinct};
    use crate::types::User;

    #[test]
    fn distinct_keeps_first_occurrence_order() {
        assert_eq!(distinct(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert!(distinct(Vec::<i32>::new()).is_empty());
    }

    #[test]
    fn create_users_drops_nulls_and_duplicates() {
        let emails = vec![
            None,
            Some("a@x.com"),
            Some("a@x.com"),
            None,
            Some("b@x.com"),
        ];
        let users = create_users(&emails);
        assert_eq!(users, vec![User::new("a@x.com"), User::new("b@x.com")]);
    }

    #[test]
    fn create_users_accepts_owned_strings() {
        let emails = vec![Some("z@x.com".to_string()), Some("y@x.com".to_string())];
        let users = create_users(&emails);
        let out: Vec<&str> = users.iter().map(User::email).collect();
        assert_eq!(out, vec!["z@x.com", "y@x.com"]);
    }

    #[test]
    fn create_users_is_case_sensitive() {
        let users = create_users(&[Some("A@x.com"), Some("a@x.com")]);
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn create_users_is_idempotent_on_its_own_output() {
        let first = create_users(&[Some("a@x.com"), None, Some("b@x.com"), Some("a@x.com")]);
        let again_input: Vec<Option<&str>> = first.iter().map(|u| Some(u.email())).collect();
        let second = create_users(&again_input);
        assert_eq!(first, second);
    }

    #[test]
    fn create_users_on_all_nulls_is_empty() {
        let emails: Vec<Option<&str>> = vec![None, None];
        assert!(create_users(&emails).is_empty());
    }
}

//! Lookup and grouping maps built from people and users.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::error::{TransformError, TransformResult};
use crate::types::{Person, User};

/// How [`group_by_email_with`] reacts when two users share an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeyPolicy {
    /// Fail with [`TransformError::DuplicateKey`] (default).
    #[default]
    Fail,
    /// Keep one user per email. A [`User`] is its email, so every candidate is equal.
    Keep,
}

/// Builds a map `email -> user`.
///
/// Fails with [`TransformError::DuplicateKey`] if two users share the same email.
pub fn group_by_email(users: &[User]) -> TransformResult<BTreeMap<String, User>> {
    group_by_email_with(users, DuplicateKeyPolicy::Fail)
}

/// Builds a map `email -> user`, resolving duplicate emails according to `policy`.
pub fn group_by_email_with(
    users: &[User],
    policy: DuplicateKeyPolicy,
) -> TransformResult<BTreeMap<String, User>> {
    let mut by_email = BTreeMap::new();
    for user in users {
        match by_email.entry(user.email().to_owned()) {
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
            }
            Entry::Occupied(slot) => {
                if policy == DuplicateKeyPolicy::Fail {
                    return Err(TransformError::DuplicateKey {
                        email: slot.key().clone(),
                    });
                }
            }
        }
    }
    Ok(by_email)
}

/// Partitions people into buckets keyed by age.
///
/// Each bucket keeps the original relative order of its people.
pub fn group_by_age(people: &[Person]) -> BTreeMap<i64, Vec<Person>> {
    people.iter().fold(BTreeMap::new(), |mut by_age, person| {
        by_age
            .entry(person.age())
            .or_insert_with(Vec::new)
            .push(person.clone());
        by_age
    })
}

#[cfg(test)]
mod tests {
    use super::{DuplicateKeyPolicy, group_by_age, group_by_email, group_by_email_with};
    use crate::error::TransformError;
    use crate::types::{Person, User};

    fn sample_users() -> Vec<User> {
        vec![
            User::new("harry@hogwarts.uk"),
            User::new("ron@hogwarts.uk"),
            User::new("hermione@hogwarts.uk"),
        ]
    }

    #[test]
    fn group_by_email_maps_every_user_to_itself() {
        let users = sample_users();
        let by_email = group_by_email(&users).unwrap();

        assert_eq!(by_email.len(), users.len());
        for u in &users {
            assert_eq!(by_email.get(u.email()), Some(u));
        }
    }

    #[test]
    fn group_by_email_fails_on_duplicate_email() {
        let mut users = sample_users();
        users.push(User::new("ron@hogwarts.uk"));

        let err = group_by_email(&users).unwrap_err();
        assert!(matches!(
            &err,
            TransformError::DuplicateKey { email } if email == "ron@hogwarts.uk"
        ));
        assert!(err.to_string().contains("duplicate key"));
    }

    #[test]
    fn group_by_email_with_keep_policy_collapses_duplicates() {
        let mut users = sample_users();
        users.push(User::new("ron@hogwarts.uk"));

        let by_email = group_by_email_with(&users, DuplicateKeyPolicy::Keep).unwrap();
        assert_eq!(by_email.len(), 3);
        assert_eq!(by_email["ron@hogwarts.uk"], User::new("ron@hogwarts.uk"));
        assert_eq!(
            by_email.keys().collect::<Vec<_>>(),
            vec!["harry@hogwarts.uk", "hermione@hogwarts.uk", "ron@hogwarts.uk"]
        );
    }

    #[test]
    fn group_by_email_on_empty_input_is_empty() {
        assert!(group_by_email(&[]).unwrap().is_empty());
    }

    #[test]
    fn group_by_age_partitions_people_in_order() {
        let people = vec![
            Person::new("Harry", 13),
            Person::new("Ron", 13),
            Person::new("Hermione", 14),
            Person::new("Neville", 13),
        ];
        let by_age = group_by_age(&people);

        assert_eq!(by_age.len(), 2);
        assert_eq!(
            by_age[&13],
            vec![
                Person::new("Harry", 13),
                Person::new("Ron", 13),
                Person::new("Neville", 13),
            ]
        );
        assert_eq!(by_age[&14], vec![Person::new("Hermione", 14)]);

        for (age, bucket) in &by_age {
            assert!(bucket.iter().all(|p| p.age() == *age));
        }
        let total: usize = by_age.values().map(Vec::len).sum();
        assert_eq!(total, people.len());
    }

    #[test]
    fn group_by_age_keeps_identical_people_in_same_bucket() {
        let people = vec![Person::new("Harry", 13), Person::new("Harry", 13)];
        let by_age = group_by_age(&people);
        assert_eq!(by_age[&13].len(), 2);
    }
}

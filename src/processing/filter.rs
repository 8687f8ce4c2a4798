//! Filtering for sequences of [`crate::types::Person`].

use std::ops::RangeInclusive;

use crate::types::Person;

/// Ages that make a person a teenager (inclusive on both ends).
pub const TEEN_AGES: RangeInclusive<i64> = 13..=19;

/// Returns a new list containing only the people for which `predicate` returns `true`.
///
/// Relative order is preserved and the input is left untouched.
pub fn filter_people<F>(people: &[Person], mut predicate: F) -> Vec<Person>
where
    F: FnMut(&Person) -> bool,
{
    people.iter().filter(|p| predicate(p)).cloned().collect()
}

/// Returns the people whose age falls within `ages` (inclusive).
pub fn filter_by_age(people: &[Person], ages: &RangeInclusive<i64>) -> Vec<Person> {
    filter_people(people, |p| ages.contains(&p.age()))
}

/// Returns the teenagers (ages 13 to 19 inclusive), in their original order.
pub fn extract_teenagers(people: &[Person]) -> Vec<Person> {
    filter_by_age(people, &TEEN_AGES)
}

//! Joining values into a single formatted string.

use crate::types::Person;

use super::distinct::distinct;

/// Joins values with a separator and wraps the result in a prefix and suffix.
///
/// An empty input produces `prefix + suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joiner {
    pub separator: String,
    pub prefix: String,
    pub suffix: String,
}

impl Joiner {
    pub fn new(
        separator: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            separator: separator.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// The joiner used by [`collect_distinct_names`]: `"Distinct names: a, b, c!"`.
    pub fn distinct_names() -> Self {
        Self::new(", ", "Distinct names: ", "!")
    }

    /// Join `values` into a single string.
    pub fn join<I, S>(&self, values: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = self.prefix.clone();
        for (i, v) in values.into_iter().enumerate() {
            if i > 0 {
                out.push_str(&self.separator);
            }
            out.push_str(v.as_ref());
        }
        out.push_str(&self.suffix);
        out
    }
}

impl Default for Joiner {
    fn default() -> Self {
        Self::distinct_names()
    }
}

/// Joins the distinct names of `people` (first-occurrence order) with `joiner`.
pub fn join_distinct_names(people: &[Person], joiner: &Joiner) -> String {
    joiner.join(distinct(people.iter().map(Person::name)))
}

/// Returns `"Distinct names: "` followed by the distinct names joined by `", "`, then `"!"`.
///
/// For example `Harry, Ron, Hermione, Harry` becomes `"Distinct names: Harry, Ron, Hermione!"`.
pub fn collect_distinct_names(people: &[Person]) -> String {
    join_distinct_names(people, &Joiner::distinct_names())
}

//! Configurable front end for [`crate::processing`].
//!
//! This module sits "above" the free functions in [`crate::processing`] and provides:
//!
//! - Configuration via [`TransformOptions`] (teen age range, name joiner, duplicate-key policy)
//! - Observer hooks and running metrics for every call
//! - An owned [`TransformRequest`] / [`TransformOutput`] pair, where absent inputs are
//!   representable and rejected with [`crate::TransformError::InvalidArgument`]

mod observer;
mod request;

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::error::{TransformError, TransformResult};
use crate::processing::{self, DuplicateKeyPolicy, Joiner, TEEN_AGES};
use crate::types::{Person, User};

pub use observer::{
    CompositeTransformObserver, StdErrTransformObserver, TracingTransformObserver, TransformEvent,
    TransformMetrics, TransformMetricsSnapshot, TransformObserver,
};
pub use request::{Operation, TransformOutput, TransformRequest};

use request::require;

/// Configuration for the [`CollectionTransformer`].
#[derive(Clone)]
pub struct TransformOptions {
    /// Ages kept by [`CollectionTransformer::extract_teenagers`] (inclusive).
    pub teen_ages: RangeInclusive<i64>,
    /// Formatting used by [`CollectionTransformer::collect_distinct_names`].
    pub names_joiner: Joiner,
    /// What [`CollectionTransformer::group_by_email`] does with repeated emails.
    pub duplicate_keys: DuplicateKeyPolicy,
    /// Optional observer for logging.
    pub observer: Option<Arc<dyn TransformObserver>>,
}

impl fmt::Debug for TransformOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformOptions")
            .field("teen_ages", &self.teen_ages)
            .field("names_joiner", &self.names_joiner)
            .field("duplicate_keys", &self.duplicate_keys)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            teen_ages: TEEN_AGES,
            names_joiner: Joiner::distinct_names(),
            duplicate_keys: DuplicateKeyPolicy::Fail,
            observer: None,
        }
    }
}

/// Runs the collection transformations with configured options, observer and metrics.
///
/// Holds no per-call state; it can be shared between threads.
///
/// ```rust
/// use std::sync::Arc;
///
/// use collection_transformer::transformer::{
///     CollectionTransformer, TracingTransformObserver, TransformOptions,
/// };
/// use collection_transformer::types::Person;
///
/// let transformer = CollectionTransformer::new(TransformOptions {
///     teen_ages: 13..=17,
///     ..Default::default()
/// })
/// .with_observer(Arc::new(TracingTransformObserver));
///
/// let people = vec![Person::new("Ginny", 16), Person::new("Percy", 19)];
/// assert_eq!(transformer.extract_teenagers(&people), vec![Person::new("Ginny", 16)]);
/// assert_eq!(transformer.metrics().snapshot().runs, 1);
/// ```
#[derive(Debug, Default)]
pub struct CollectionTransformer {
    opts: TransformOptions,
    metrics: Arc<TransformMetrics>,
}

impl CollectionTransformer {
    pub fn new(opts: TransformOptions) -> Self {
        Self {
            opts,
            metrics: Arc::new(TransformMetrics::new()),
        }
    }

    /// Attach an observer for transform events.
    pub fn with_observer(mut self, observer: Arc<dyn TransformObserver>) -> Self {
        self.opts.observer = Some(observer);
        self
    }

    pub fn options(&self) -> &TransformOptions {
        &self.opts
    }

    /// Get a handle to the running metrics.
    pub fn metrics(&self) -> Arc<TransformMetrics> {
        Arc::clone(&self.metrics)
    }

    /// People whose age is within [`TransformOptions::teen_ages`], in original order.
    pub fn extract_teenagers(&self, people: &[Person]) -> Vec<Person> {
        self.infallible(Operation::ExtractTeenagers, people.len(), Vec::len, || {
            processing::filter_by_age(people, &self.opts.teen_ages)
        })
    }

    /// One user per distinct, present email, in order of first appearance.
    pub fn create_users<S>(&self, emails: &[Option<S>]) -> Vec<User>
    where
        S: AsRef<str>,
    {
        self.infallible(Operation::CreateUsers, emails.len(), Vec::len, || {
            processing::create_users(emails)
        })
    }

    /// `email -> user` lookup, resolving repeats with [`TransformOptions::duplicate_keys`].
    pub fn group_by_email(&self, users: &[User]) -> TransformResult<BTreeMap<String, User>> {
        self.observed(Operation::GroupByEmail, users.len(), BTreeMap::len, || {
            processing::group_by_email_with(users, self.opts.duplicate_keys)
        })
    }

    /// `age -> people` buckets.
    pub fn group_by_age(&self, people: &[Person]) -> BTreeMap<i64, Vec<Person>> {
        self.infallible(Operation::GroupByAge, people.len(), BTreeMap::len, || {
            processing::group_by_age(people)
        })
    }

    /// Distinct names joined with [`TransformOptions::names_joiner`].
    pub fn collect_distinct_names(&self, people: &[Person]) -> String {
        self.infallible(Operation::CollectDistinctNames, people.len(), |_| 1, || {
            processing::join_distinct_names(people, &self.opts.names_joiner)
        })
    }

    /// Execute a [`TransformRequest`].
    pub fn run(&self, request: &TransformRequest) -> TransformResult<TransformOutput> {
        let op = request.operation;
        let out = match op {
            Operation::ExtractTeenagers => {
                let people = self.input(require(&request.people, op, "people"), op)?;
                TransformOutput::People(self.extract_teenagers(people))
            }
            Operation::CreateUsers => {
                let emails = self.input(require(&request.emails, op, "emails"), op)?;
                TransformOutput::Users(self.create_users(emails))
            }
            Operation::GroupByEmail => {
                let users = self.input(require(&request.users, op, "users"), op)?;
                TransformOutput::UsersByEmail(self.group_by_email(users)?)
            }
            Operation::GroupByAge => {
                let people = self.input(require(&request.people, op, "people"), op)?;
                TransformOutput::PeopleByAge(self.group_by_age(people))
            }
            Operation::CollectDistinctNames => {
                let people = self.input(require(&request.people, op, "people"), op)?;
                TransformOutput::Text(self.collect_distinct_names(people))
            }
        };
        Ok(out)
    }

    /// An absent input is still a run: it is reported as `Started` (with no items) then `Failed`.
    fn input<'a, T>(
        &self,
        input: TransformResult<&'a [T]>,
        operation: Operation,
    ) -> TransformResult<&'a [T]> {
        if let Err(e) = &input {
            self.start(operation, 0);
            self.fail(operation, e);
        }
        input
    }

    fn infallible<T>(
        &self,
        operation: Operation,
        input_len: usize,
        output_len: impl Fn(&T) -> usize,
        f: impl FnOnce() -> T,
    ) -> T {
        self.start(operation, input_len);
        let out = f();
        self.finish(operation, output_len(&out));
        out
    }

    fn observed<T>(
        &self,
        operation: Operation,
        input_len: usize,
        output_len: impl Fn(&T) -> usize,
        f: impl FnOnce() -> TransformResult<T>,
    ) -> TransformResult<T> {
        self.start(operation, input_len);
        match f() {
            Ok(out) => {
                self.finish(operation, output_len(&out));
                Ok(out)
            }
            Err(e) => {
                self.fail(operation, &e);
                Err(e)
            }
        }
    }

    fn start(&self, operation: Operation, input_len: usize) {
        self.metrics.on_start(input_len);
        self.emit(TransformEvent::Started {
            operation,
            input_len,
        });
    }

    fn finish(&self, operation: Operation, output_len: usize) {
        self.metrics.on_finish(output_len);
        self.emit(TransformEvent::Finished {
            operation,
            output_len,
        });
    }

    fn fail(&self, operation: Operation, error: &TransformError) {
        self.metrics.on_failure();
        self.emit(TransformEvent::Failed {
            operation,
            error: error.to_string(),
        });
    }

    fn emit(&self, event: TransformEvent) {
        if let Some(obs) = &self.opts.observer {
            obs.on_event(&event);
        }
    }
}

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Operation;

/// Events emitted by the [`super::CollectionTransformer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformEvent {
    Started { operation: Operation, input_len: usize },
    Finished { operation: Operation, output_len: usize },
    Failed { operation: Operation, error: String },
}

/// Observer hook for transform events.
pub trait TransformObserver: Send + Sync {
    fn on_event(&self, event: &TransformEvent);
}

/// A simple stderr logger for transform events.
#[derive(Debug, Default)]
pub struct StdErrTransformObserver;

impl TransformObserver for StdErrTransformObserver {
    fn on_event(&self, event: &TransformEvent) {
        match event {
            TransformEvent::Started {
                operation,
                input_len,
            } => eprintln!("[transform][start] op={operation} input={input_len}"),
            TransformEvent::Finished {
                operation,
                output_len,
            } => eprintln!("[transform][ok] op={operation} output={output_len}"),
            TransformEvent::Failed { operation, error } => {
                eprintln!("[transform][fail] op={operation} err={error}")
            }
        }
    }
}

/// Forwards transform events to `tracing`.
///
/// Starts/finishes are emitted at `debug`, failures at `warn`.
#[derive(Debug, Default)]
pub struct TracingTransformObserver;

impl TransformObserver for TracingTransformObserver {
    fn on_event(&self, event: &TransformEvent) {
        match event {
            TransformEvent::Started {
                operation,
                input_len,
            } => tracing::debug!(op = %operation, input_len, "transform started"),
            TransformEvent::Finished {
                operation,
                output_len,
            } => tracing::debug!(op = %operation, output_len, "transform finished"),
            TransformEvent::Failed { operation, error } => {
                tracing::warn!(op = %operation, error = %error, "transform failed")
            }
        }
    }
}

/// An observer that fans out events to a list of observers.
#[derive(Default)]
pub struct CompositeTransformObserver {
    observers: Vec<Arc<dyn TransformObserver>>,
}

impl CompositeTransformObserver {
    pub fn new(observers: Vec<Arc<dyn TransformObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeTransformObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeTransformObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl TransformObserver for CompositeTransformObserver {
    fn on_event(&self, event: &TransformEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}

/// Running counters for a [`super::CollectionTransformer`].
///
/// The transformer updates these on every call; callers can snapshot them at any time.
#[derive(Debug, Default)]
pub struct TransformMetrics {
    runs: AtomicU64,
    failures: AtomicU64,
    items_in: AtomicU64,
    items_out: AtomicU64,
}

impl TransformMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on_start(&self, input_len: usize) {
        let _ = self.runs.fetch_add(1, Ordering::SeqCst);
        let _ = self.items_in.fetch_add(input_len as u64, Ordering::SeqCst);
    }

    pub(crate) fn on_finish(&self, output_len: usize) {
        let _ = self.items_out.fetch_add(output_len as u64, Ordering::SeqCst);
    }

    pub(crate) fn on_failure(&self) {
        let _ = self.failures.fetch_add(1, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> TransformMetricsSnapshot {
        TransformMetricsSnapshot {
            runs: self.runs.load(Ordering::SeqCst),
            failures: self.failures.load(Ordering::SeqCst),
            items_in: self.items_in.load(Ordering::SeqCst),
            items_out: self.items_out.load(Ordering::SeqCst),
        }
    }
}

/// Immutable snapshot of [`TransformMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformMetricsSnapshot {
    pub runs: u64,
    pub failures: u64,
    pub items_in: u64,
    pub items_out: u64,
}

impl fmt::Display for TransformMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "runs={}, failures={}, items_in={}, items_out={}",
            self.runs, self.failures, self.items_in, self.items_out
        )
    }
}

//! Evaluation observer: hooks for progress reporting.
//!
//! Observers are notified once per document, in document order, after the
//! document's keyword sets and scores are known. They never influence the
//! results.

use crate::types::Method;

/// Receives per-document progress notifications.
///
/// All methods have empty default implementations, so observers only
/// override what they need.
pub trait ProgressObserver {
    /// A run over `total` documents is starting.
    fn on_start(&mut self, _total: usize) {}

    /// Document `index` (0-based) finished successfully.
    fn on_document(&mut self, _index: usize, _total: usize) {}

    /// Document `index` failed and was skipped.
    fn on_failure(&mut self, _index: usize, _id: &str, _error: &str) {}

    /// A method finished aggregating.
    fn on_method_complete(&mut self, _method: Method, _documents: usize) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {}

/// Logs a progress line roughly every tenth of the corpus.
#[derive(Debug, Clone, Default)]
pub struct ProgressLogger {
    interval: usize,
    processed: usize,
}

impl ProgressLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents processed so far.
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// `total / 10` rounded half to even, at least 1
    fn interval_for(total: usize) -> usize {
        ((total as f64 / 10.0).round_ties_even() as usize).max(1)
    }

    fn should_log(&self, index: usize) -> bool {
        index % self.interval.max(1) == 0
    }
}

impl ProgressObserver for ProgressLogger {
    fn on_start(&mut self, total: usize) {
        self.interval = Self::interval_for(total);
        self.processed = 0;
        tracing::info!(documents = total, "evaluation started");
    }

    fn on_document(&mut self, index: usize, total: usize) {
        self.processed += 1;
        if self.should_log(index) {
            tracing::info!(processed = index, total, "documents processed");
        }
    }

    fn on_failure(&mut self, index: usize, id: &str, error: &str) {
        tracing::warn!(index, id, error, "document skipped");
    }

    fn on_method_complete(&mut self, method: Method, documents: usize) {
        tracing::info!(method = method.as_str(), documents, "method aggregated");
    }
}

/// Records every notification; handy for tests and debugging.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub started: Option<usize>,
    pub documents: Vec<usize>,
    pub failures: Vec<(usize, String)>,
    pub methods: Vec<Method>,
}

impl ProgressObserver for RecordingObserver {
    fn on_start(&mut self, total: usize) {
        self.started = Some(total);
    }

    fn on_document(&mut self, index: usize, _total: usize) {
        self.documents.push(index);
    }

    fn on_failure(&mut self, index: usize, id: &str, _error: &str) {
        self.failures.push((index, id.to_string()));
    }

    fn on_method_complete(&mut self, method: Method, _documents: usize) {
        self.methods.push(method);
    }
}

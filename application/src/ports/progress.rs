//! Progress notification port
//!
//! Defines the interface for reporting progress through the model-fallback
//! loop.

use prepwise_domain::{FailureClass, GenerationOutcome, ModelCandidate, RequestKind};
use std::time::Duration;

/// Callback for progress updates during generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console spinner, web UI, etc.)
pub trait GenerationProgress: Send + Sync {
    /// Called once before the first provider call.
    fn on_generation_start(&self, _kind: RequestKind, _candidates: usize) {}

    /// Called before each provider call; `attempt` is 1-based.
    fn on_attempt_start(&self, model: &ModelCandidate, attempt: usize, total: usize);

    /// Called when a provider call fails.
    fn on_attempt_failed(&self, model: &ModelCandidate, class: FailureClass, message: &str);

    /// Called when a provider call returns text.
    fn on_attempt_succeeded(&self, model: &ModelCandidate);

    /// Called while waiting before the next candidate.
    fn on_backoff(&self, _delay: Duration) {}

    /// Called with the terminal outcome.
    fn on_generation_complete(&self, _outcome: &GenerationOutcome) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl GenerationProgress for NoProgress {
    fn on_attempt_start(&self, _model: &ModelCandidate, _attempt: usize, _total: usize) {}
    fn on_attempt_failed(&self, _model: &ModelCandidate, _class: FailureClass, _message: &str) {}
    fn on_attempt_succeeded(&self, _model: &ModelCandidate) {}
}

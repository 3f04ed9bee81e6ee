//! Port for structured generation transcripts.
//!
//! Defines the [`ConversationLogger`] trait for recording what was sent to
//! and received from the provider (prompts, raw responses, failures, final
//! outcomes) in a machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing carries
//! human-readable diagnostics, this port carries the full transcript.

use serde_json::Value;
use std::sync::Mutex;

/// A structured transcript event.
pub struct ConversationEvent {
    /// Event type identifier (e.g. "generation_request", "provider_error").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging transcript events.
///
/// `log` is synchronous and infallible: a broken transcript must never
/// interrupt generation, so implementations swallow their own failures.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for when transcripts are disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

/// Keeps events in memory; useful for tests and embedding callers that
/// want to inspect a single request's transcript.
#[derive(Default)]
pub struct MemoryConversationLogger {
    events: Mutex<Vec<(&'static str, Value)>>,
}

impl MemoryConversationLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Event types recorded so far, in order.
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .map(|events| events.iter().map(|(t, _)| *t).collect())
            .unwrap_or_default()
    }

    /// Payloads of all events with the given type.
    pub fn payloads(&self, event_type: &str) -> Vec<Value> {
        self.events
            .lock()
            .map(|events| {
                events
                    .iter()
                    .filter(|(t, _)| *t == event_type)
                    .map(|(_, p)| p.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl ConversationLogger for MemoryConversationLogger {
    fn log(&self, event: ConversationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push((event.event_type, event.payload));
        }
    }
}

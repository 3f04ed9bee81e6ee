//! Provider failure classification.
//!
//! The provider exposes no structured error codes, so the error message is
//! the only signal. All signature matching lives in [`SIGNATURES`]; when the
//! provider changes its wording, that table is the one place to update.

use serde::{Deserialize, Serialize};

/// Why a fatal failure is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FatalCause {
    /// Credential rejected; identical for every model.
    Credential,
    /// Unrecognized failure.
    Other,
}

/// What the fallback loop should do after a failed provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureClass {
    /// Model unavailable; try the next candidate.
    Retryable,
    /// Rate or quota limit; try the next candidate and remember it.
    QuotaExhausted,
    /// Stop the loop.
    Fatal(FatalCause),
}

impl FailureClass {
    pub fn is_fatal(&self) -> bool {
        matches!(self, FailureClass::Fatal(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FailureClass::Retryable => "retryable",
            FailureClass::QuotaExhausted => "quota_exhausted",
            FailureClass::Fatal(FatalCause::Credential) => "fatal_credential",
            FailureClass::Fatal(FatalCause::Other) => "fatal",
        }
    }
}

impl std::fmt::Display for FailureClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Signature table, checked top to bottom; first match wins.
///
/// Needles are lowercase and matched against the lowercased message.
/// Credential signatures come first so that e.g. "API key not found" is
/// never mistaken for a missing model.
pub const SIGNATURES: &[(&str, FailureClass)] = &[
    ("api_key_invalid", FailureClass::Fatal(FatalCause::Credential)),
    ("api key", FailureClass::Fatal(FatalCause::Credential)),
    ("429", FailureClass::QuotaExhausted),
    ("quota", FailureClass::QuotaExhausted),
    ("404", FailureClass::Retryable),
    ("not found", FailureClass::Retryable),
    ("not available", FailureClass::Retryable),
];

/// Classify a raw provider error message.
pub fn classify(message: &str) -> FailureClass {
    let lower = message.to_lowercase();
    SIGNATURES
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, class)| *class)
        .unwrap_or(FailureClass::Fatal(FatalCause::Other))
}

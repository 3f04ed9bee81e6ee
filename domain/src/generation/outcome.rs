//! Terminal result of one generation request

use super::payload::GeneratedContent;
use crate::core::error::GenerationError;
use serde::{Deserialize, Serialize};

/// Why placeholder content was returned instead of provider output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradedReason {
    /// No provider credential is configured.
    MissingCredential,
    /// Every candidate failed and at least one hit a quota limit.
    QuotaExhausted,
}

impl DegradedReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DegradedReason::MissingCredential => "missing_credential",
            DegradedReason::QuotaExhausted => "quota_exhausted",
        }
    }
}

impl std::fmt::Display for DegradedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Provider output that passed validation.
    Success {
        content: GeneratedContent,
        model: String,
    },
    /// Deterministic placeholder content; not an error.
    Degraded {
        content: GeneratedContent,
        reason: DegradedReason,
    },
    Failed(GenerationError),
}

impl GenerationOutcome {
    pub fn content(&self) -> Option<&GeneratedContent> {
        match self {
            GenerationOutcome::Success { content, .. }
            | GenerationOutcome::Degraded { content, .. } => Some(content),
            GenerationOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&GenerationError> {
        match self {
            GenerationOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success { .. })
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, GenerationOutcome::Degraded { .. })
    }

    /// Short label for logs and transcripts.
    pub fn status(&self) -> &'static str {
        match self {
            GenerationOutcome::Success { .. } => "success",
            GenerationOutcome::Degraded { .. } => "degraded",
            GenerationOutcome::Failed(_) => "failed",
        }
    }

    /// Collapse into a `Result`, treating degraded content as usable.
    pub fn into_result(self) -> Result<GeneratedContent, GenerationError> {
        match self {
            GenerationOutcome::Success { content, .. }
            | GenerationOutcome::Degraded { content, .. } => Ok(content),
            GenerationOutcome::Failed(e) => Err(e),
        }
    }
}

impl From<GenerationError> for GenerationOutcome {
    fn from(error: GenerationError) -> Self {
        GenerationOutcome::Failed(error)
    }
}

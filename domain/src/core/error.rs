//! Domain error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the generation pipeline.
///
/// Retryable and quota failures never appear here: they are absorbed by the
/// fallback loop and only show up as the terminal outcome's classification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid AI response: {0}")]
    InvalidResponse(String),

    #[error("Malformed AI payload: {0}")]
    MalformedPayload(String),

    #[error("Model not available: {message}")]
    ModelUnavailable { message: String },

    #[error("Invalid provider credential: {0}")]
    Credential(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Operation cancelled")]
    Cancelled,
}

/// Coarse error classification used by callers to pick a response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidRequest,
    InvalidResponse,
    MalformedPayload,
    ModelUnavailable,
    Credential,
    Provider,
    Cancelled,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::InvalidResponse => "invalid_response",
            ErrorKind::MalformedPayload => "malformed_payload",
            ErrorKind::ModelUnavailable => "model_unavailable",
            ErrorKind::Credential => "credential",
            ErrorKind::Provider => "provider",
            ErrorKind::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            GenerationError::InvalidResponse(_) => ErrorKind::InvalidResponse,
            GenerationError::MalformedPayload(_) => ErrorKind::MalformedPayload,
            GenerationError::ModelUnavailable { .. } => ErrorKind::ModelUnavailable,
            GenerationError::Credential(_) => ErrorKind::Credential,
            GenerationError::Provider(_) => ErrorKind::Provider,
            GenerationError::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GenerationError::Cancelled)
    }

    /// True for errors caused by what the provider sent back rather than
    /// whether it could be reached.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            GenerationError::InvalidResponse(_) | GenerationError::MalformedPayload(_)
        )
    }
}

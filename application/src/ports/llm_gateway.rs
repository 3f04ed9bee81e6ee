//! LLM Gateway port
//!
//! Defines the interface for communicating with the generative-AI provider.

use async_trait::async_trait;
use prepwise_domain::ModelCandidate;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations.
///
/// The rendered message is the only thing the fallback loop inspects, so
/// adapters should keep the provider's own wording (status codes, reason
/// strings) intact.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Whether a provider credential is configured at all.
    ///
    /// When this returns `false` no call to [`generate`](Self::generate)
    /// is made.
    fn is_configured(&self) -> bool;

    /// Send `prompt` to `model` and return the raw text response.
    async fn generate(&self, model: &ModelCandidate, prompt: &str) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_keep_provider_wording() {
        let err = GatewayError::RequestFailed("[429 Too Many Requests] quota".into());
        assert_eq!(err.to_string(), "Request failed: [429 Too Many Requests] quota");
        assert_eq!(GatewayError::Timeout.to_string(), "Timeout");
    }
}

//! Shared utilities for use cases.
//!
//! Cancellation helpers used by both generation and model probing.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use prepwise_domain::{GenerationError, ModelCandidate};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Check if cancellation has been requested.
///
/// Returns `Err(GenerationError::Cancelled)` if the token exists and is cancelled.
pub(crate) fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), GenerationError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(GenerationError::Cancelled);
    }
    Ok(())
}

/// Call the provider, abandoning the call if the token fires first.
pub(crate) async fn generate_cancellable(
    gateway: &dyn LlmGateway,
    model: &ModelCandidate,
    prompt: &str,
    token: &Option<CancellationToken>,
) -> Result<Result<String, GatewayError>, GenerationError> {
    let call = gateway.generate(model, prompt);
    match token {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(GenerationError::Cancelled),
            result = call => Ok(result),
        },
        None => Ok(call.await),
    }
}

/// Suspend for `delay` without blocking the runtime; cancellation cuts the
/// wait short.
pub(crate) async fn pause_cancellable(
    delay: Duration,
    token: &Option<CancellationToken>,
) -> Result<(), GenerationError> {
    if delay.is_zero() {
        return check_cancelled(token);
    }
    match token {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(GenerationError::Cancelled),
            _ = tokio::time::sleep(delay) => Ok(()),
        },
        None => {
            tokio::time::sleep(delay).await;
            Ok(())
        }
    }
}

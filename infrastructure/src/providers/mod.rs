//! Generative-AI provider adapters.
//!
//! Each adapter implements the [`LlmGateway`](prepwise_application::LlmGateway)
//! port for one vendor's API.

#[cfg(feature = "gemini")]
pub mod gemini;

//! Google Gemini REST provider
//!
//! Talks to the `models/{model}:generateContent` endpoint of the
//! Generative Language API with an API key.

mod adapter;
mod types;

pub use adapter::GeminiGateway;

//! Infrastructure layer for prepwise
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Gemini gateway, the JSONL transcript
//! writer, and configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGenerationConfig, FileLoggingConfig,
    FileModelsConfig, FileOutputConfig, FileOutputFormat, FileProviderConfig,
};
pub use logging::JsonlConversationLogger;
#[cfg(feature = "gemini")]
pub use providers::gemini::GeminiGateway;

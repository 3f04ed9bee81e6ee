//! Application layer for prepwise
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_RETRY_DELAY, GenerationParams};
pub use ports::{
    conversation_logger::{
        ConversationEvent, ConversationLogger, MemoryConversationLogger, NoConversationLogger,
    },
    llm_gateway::{GatewayError, LlmGateway},
    progress::{GenerationProgress, NoProgress},
};
pub use use_cases::generate_content::GenerateContentUseCase;
pub use use_cases::probe_models::{
    ModelAvailability, ModelProbe, ProbeModelsUseCase, ProbeReport,
};

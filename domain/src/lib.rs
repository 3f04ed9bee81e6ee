//! Domain layer for prepwise
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Generation
//!
//! A [`GenerationRequest`] asks either for an explanation of one interview
//! question or for a batch of questions with answers. The provider's raw
//! text is sanitized, validated, and turned into [`GeneratedContent`].
//!
//! ## Fallback
//!
//! Candidate models are tried in [`ModelCatalog`] order. Failures are
//! sorted by [`classify`] into retryable, quota, and fatal; a quota-bound
//! exhaustion degrades to deterministic placeholder content.

pub mod config;
pub mod core;
pub mod generation;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    error::{ErrorKind, GenerationError},
    model::{DEFAULT_MODEL_IDS, ModelCandidate, ModelCatalog},
};
pub use generation::{
    classify::{FailureClass, FatalCause, classify},
    outcome::{DegradedReason, GenerationOutcome},
    payload::{Explanation, GeneratedContent, NO_ANSWER_PLACEHOLDER, QuestionAnswer},
    placeholder::placeholder_for,
    request::{
        ExplanationRequest, GenerationRequest, QuestionCount, QuestionSetRequest, RequestKind,
    },
    sanitize::sanitize,
    validate::validate,
};
pub use prompt::PromptTemplate;

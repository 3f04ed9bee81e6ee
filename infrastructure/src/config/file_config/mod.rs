//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generation;
mod logging;
mod models;
mod output;
mod provider;

pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use provider::{DEFAULT_GEMINI_BASE_URL, FileProviderConfig};

use prepwise_application::GenerationParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("provider.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("models.candidates: model name cannot be empty (index {index})")]
    EmptyModelName { index: usize },

    #[error("models.candidates cannot be empty")]
    NoModels,

    #[error("provider.base_url must start with http:// or https://")]
    InvalidBaseUrl,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider endpoint and credential
    pub provider: FileProviderConfig,
    /// Candidate models
    pub models: FileModelsConfig,
    /// Fallback loop settings
    pub generation: FileGenerationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if let Some(0) = self.provider.timeout_seconds {
            issues.push(ConfigValidationError::InvalidTimeout);
        }

        let base_url = self.provider.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigValidationError::InvalidBaseUrl);
        }

        if self.models.candidates.is_empty() {
            issues.push(ConfigValidationError::NoModels);
        }
        for (index, model) in self.models.candidates.iter().enumerate() {
            if model.trim().is_empty() {
                issues.push(ConfigValidationError::EmptyModelName { index });
            }
        }

        issues
    }

    /// Fallback loop parameters derived from `[models]` and `[generation]`.
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_catalog(self.models.catalog())
            .with_retry_delay(Duration::from_millis(self.generation.retry_delay_ms))
            .with_retry_on_malformed(self.generation.retry_on_malformed)
    }
}

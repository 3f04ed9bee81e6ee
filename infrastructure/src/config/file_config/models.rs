//! Candidate model configuration from TOML (`[models]` section)

use prepwise_domain::{DEFAULT_MODEL_IDS, ModelCatalog};
use serde::{Deserialize, Serialize};

/// Candidate models, tried in listed order.
///
/// # Example
///
/// ```toml
/// [models]
/// candidates = ["gemini-2.5-flash", "gemini-1.5-pro"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub candidates: Vec<String>,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_MODEL_IDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FileModelsConfig {
    /// Build the catalog; list order becomes priority order.
    pub fn catalog(&self) -> ModelCatalog {
        ModelCatalog::from_identifiers(&self.candidates)
    }
}

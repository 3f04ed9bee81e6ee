//! Output format value object

use serde::{Deserialize, Serialize};

/// How generated content is rendered for the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable console output (default)
    Text,
    /// Raw JSON payload
    Json,
    /// JSON envelope with the HTTP status a web handler would return
    Http,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

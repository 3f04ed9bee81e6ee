//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// # Example
///
/// ```toml
/// [logging]
/// conversation_log = "~/.local/state/prepwise/transcript.jsonl"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of prompts, responses, and outcomes; off when unset
    pub conversation_log: Option<String>,
}

impl FileLoggingConfig {
    /// Transcript path with a leading `~/` expanded.
    pub fn conversation_log_path(&self) -> Option<PathBuf> {
        let raw = self.conversation_log.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}

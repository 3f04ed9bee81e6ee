//! Fallback loop configuration from TOML (`[generation]` section)

use serde::{Deserialize, Serialize};

/// # Example
///
/// ```toml
/// [generation]
/// retry_delay_ms = 1000
/// retry_on_malformed = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Pause before trying the next candidate model
    pub retry_delay_ms: u64,
    /// Move on to the next model when a response fails validation
    pub retry_on_malformed: bool,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            retry_delay_ms: 1000,
            retry_on_malformed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_generation_deserialize() {
        let toml_str = r#"
[generation]
retry_delay_ms = 250
retry_on_malformed = true
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generation.retry_delay_ms, 250);
        assert!(config.generation.retry_on_malformed);
    }
}

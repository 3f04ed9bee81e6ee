//! Provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Generative-AI provider settings.
///
/// # Example
///
/// ```toml
/// [provider]
/// api_key = "..."            # usually supplied via GEMINI_API_KEY instead
/// base_url = "https://generativelanguage.googleapis.com/v1beta"
/// timeout_seconds = 60
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Provider API key
    pub api_key: Option<String>,
    /// REST endpoint root
    pub base_url: String,
    /// Per-request timeout; none by default
    pub timeout_seconds: Option<u64>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileProviderConfig {
    /// The API key, if one is usable.
    ///
    /// Blank values and the literal string `"undefined"` (what an unset
    /// variable turns into when passed through some shells and templating
    /// layers) count as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != "undefined")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_filtering() {
        let mut config = FileProviderConfig::default();
        assert_eq!(config.api_key(), None);

        config.api_key = Some("undefined".to_string());
        assert_eq!(config.api_key(), None);

        config.api_key = Some("   ".to_string());
        assert_eq!(config.api_key(), None);

        config.api_key = Some(" AIzaTest ".to_string());
        assert_eq!(config.api_key(), Some("AIzaTest"));
    }

    #[test]
    fn test_provider_deserialize() {
        let toml_str = r#"
[provider]
base_url = "http://localhost:8080"
timeout_seconds = 30
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.base_url, "http://localhost:8080");
        assert_eq!(config.provider.timeout_seconds, Some(30));
        assert!(config.provider.api_key.is_none());
    }
}

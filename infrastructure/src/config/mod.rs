//! Configuration file loading for prepwise
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PREPWISE_*` environment variables (`__` separates sections)
//! 2. `GEMINI_API_KEY` (credential only)
//! 3. `--config <path>` specified file
//! 4. Project root: `./prepwise.toml` or `./.prepwise.toml`
//! 5. XDG config: `$XDG_CONFIG_HOME/prepwise/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_GEMINI_BASE_URL, FileConfig, FileGenerationConfig,
    FileLoggingConfig, FileModelsConfig, FileOutputConfig, FileOutputFormat, FileProviderConfig,
};
pub use loader::ConfigLoader;

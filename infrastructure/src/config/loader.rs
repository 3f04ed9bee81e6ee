//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const PROJECT_CONFIG_FILES: [&str; 2] = ["prepwise.toml", ".prepwise.toml"];

/// Prefix for structured overrides, e.g. `PREPWISE_GENERATION__RETRY_DELAY_MS`.
const ENV_PREFIX: &str = "PREPWISE_";

/// Conventional credential variable, mapped onto `provider.api_key`.
const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `PREPWISE_*` environment variables
    /// 2. `GEMINI_API_KEY`
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./prepwise.toml` or `./.prepwise.toml`
    /// 5. Global: `$XDG_CONFIG_HOME/prepwise/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(
                Env::raw()
                    .only(&[API_KEY_ENV])
                    .map(|_| "provider.api_key".into()),
            )
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    ///
    /// The credential is still read from `GEMINI_API_KEY`; without it every
    /// generation would degrade.
    pub fn load_defaults() -> FileConfig {
        let mut config = FileConfig::default();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config.provider.api_key = Some(key);
        }
        config
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/prepwise/config.toml if set,
    /// otherwise falls back to ~/.config/prepwise/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("prepwise").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] {}* variables", ENV_PREFIX);
        if std::env::var_os(API_KEY_ENV).is_some() {
            println!("  [FOUND] {}", API_KEY_ENV);
        } else {
            println!("  [     ] {}", API_KEY_ENV);
        }

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./prepwise.toml or ./.prepwise.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

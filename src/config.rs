//! Configuration management for Shelfmark

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Path of the catalog store file
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables.
    ///
    /// `store_override` (the `--store` CLI flag) wins over every other source.
    pub fn load(store_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix SHELFMARK_)
            .add_source(
                Environment::with_prefix("SHELFMARK")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override store path from SHELFMARK_STORE env var if present
            .set_override_option("storage.path", env::var("SHELFMARK_STORE").ok())?
            // Override store path from the command line if given
            .set_override_option(
                "storage.path",
                store_override.map(|p| p.display().to_string()),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("books.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

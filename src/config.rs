//! Configuration management for the JSON store
//!
//! Values come from an optional TOML file, overridden by `JSONSTORE_*`
//! environment variables.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

use crate::storage::{BaseDirectory, DEFAULT_STORE_FOLDER};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "jsonstore";

/// Store configuration, read once at startup
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory that survives restarts; the store lives in a folder below it.
    /// Environment: JSONSTORE_PERMANENT_DIRECTORY
    #[serde(default = "default_permanent_directory")]
    pub permanent_directory: String,

    /// Name of the store folder inside the permanent directory
    /// Environment: JSONSTORE_STORE_FOLDER
    #[serde(default = "default_store_folder")]
    pub store_folder: String,

    /// Default log filter when RUST_LOG is not set
    /// Environment: JSONSTORE_LOG_LEVEL
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_permanent_directory() -> String {
    "./permdir".to_string()
}

fn default_store_folder() -> String {
    DEFAULT_STORE_FOLDER.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl StoreConfig {
    /// Load configuration from `path` (or `jsonstore.toml`) with environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };
        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("JSONSTORE"))
            .build()?;
        Self::finish(settings)
    }

    /// Load configuration from TOML text, without environment overrides
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Self::finish(settings)
    }

    fn finish(settings: Config) -> Result<Self, config::ConfigError> {
        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.permanent_directory.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "permanent_directory cannot be empty".into(),
            ));
        }

        let mut components = Path::new(&self.store_folder).components();
        let single_segment = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_segment {
            return Err(config::ConfigError::Message(format!(
                "store_folder must be a single directory name, got {:?}",
                self.store_folder
            )));
        }

        if self.log_level.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "log_level cannot be empty".into(),
            ));
        }

        Ok(())
    }

    /// Get the permanent directory as PathBuf
    pub fn permanent_directory_path(&self) -> PathBuf {
        PathBuf::from(&self.permanent_directory)
    }
}

impl BaseDirectory for StoreConfig {
    fn permanent_directory(&self) -> PathBuf {
        self.permanent_directory_path()
    }
}

//! Settings store port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for persisted settings
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load settings from storage.
    ///
    /// # Returns
    /// The loaded config (all fields None if nothing is stored yet)
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Replace the stored settings with `config`.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the settings file.
    fn path(&self) -> PathBuf;

    /// Whether a settings file exists.
    fn exists(&self) -> bool;

    /// Write a settings file with defaults.
    /// Fails if one already exists.
    async fn init(&self) -> Result<(), ConfigError>;

    /// Load settings, treating unreadable or invalid files as empty.
    async fn load_or_empty(&self) -> AppConfig {
        match self.load().await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path().display(), "ignoring settings file");
                AppConfig::empty()
            }
        }
    }
}

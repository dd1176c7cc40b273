//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use tramita_core::TramitaError;

/// Environment variable selecting the environment overlay file.
pub const ENVIRONMENT_VAR: &str = "TRAMITA_ENVIRONMENT";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: PathBuf,
    environment: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `<dir>/default.toml` - Default values
    /// 2. `<dir>/{environment}.toml` - Environment-specific overrides
    /// 3. `<dir>/local.toml` - Local overrides
    /// 4. Environment variables with `TRAMITA__` prefix
    ///
    /// The environment comes from `TRAMITA_ENVIRONMENT`, defaulting to
    /// `development`.
    pub fn new(config_dir: impl Into<PathBuf>) -> Result<Self, TramitaError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());
        Self::with_environment(config_dir, environment)
    }

    /// Creates a loader for an explicit environment.
    pub fn with_environment(config_dir: impl Into<PathBuf>, environment: impl Into<String>) -> Result<Self, TramitaError> {
        let config_dir = config_dir.into();
        let environment = environment.into();
        let config = Self::load_config(&config_dir, &environment)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
            environment,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, TramitaError> {
        Self::new("./config")
    }

    /// Returns the environment whose overlay is applied.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    ///
    /// The current configuration is kept if the new one fails to load.
    pub async fn reload(&self) -> Result<(), TramitaError> {
        let new_config = Self::load_config(&self.config_dir, &self.environment)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Gets a specific configuration value by dotted key path.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let config = self.config.read().await;
        let json = serde_json::to_value(&*config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }

    fn load_config(config_dir: &Path, environment: &str) -> Result<AppConfig, TramitaError> {
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment, "local"] {
            let path = config_dir.join(format!("{}.toml", name));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("TRAMITA")
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_tramita_error)?;

        ConfigValidator::ensure_valid(&app_config)?;

        Ok(app_config)
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("config_dir", &self.config_dir)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

fn config_error_to_tramita_error(err: ConfigError) -> TramitaError {
    TramitaError::Configuration(err.to_string())
}

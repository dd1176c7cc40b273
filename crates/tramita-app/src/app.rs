//! Application builder.

use crate::bootstrap::seed_admin;
use crate::di::{AppContainer, RepositoryResolver};
use crate::startup::{print_banner, print_startup_info};
use std::path::PathBuf;
use tracing::info;
use tramita_config::{AppConfig, ConfigLoader, ConfigValidator};
use tramita_core::telemetry::init_tracing;
use tramita_core::TramitaResult;

/// Application builder: loads configuration, installs logging, wires the
/// container and seeds startup data.
#[derive(Default)]
pub struct AppBuilder {
    config: Option<AppConfig>,
    config_dir: Option<PathBuf>,
}

impl AppBuilder {
    /// Creates a new application builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `config` instead of loading one.
    #[must_use]
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Loads configuration from `dir` instead of `./config`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    /// Starts the application and returns its wired container.
    pub async fn start(self) -> TramitaResult<AppContainer> {
        let config = match (self.config, self.config_dir) {
            (Some(config), _) => config,
            (None, Some(dir)) => ConfigLoader::new(dir)?.get().await,
            (None, None) => ConfigLoader::from_default_location()?.get().await,
        };
        ConfigValidator::ensure_valid(&config)?;

        init_tracing(&config.logging)?;
        print_banner();
        info!("Starting {} v{}", config.app.name, config.app.version);

        let container = AppContainer::from_config(config);
        seed_admin(&container).await?;

        let users = container.user_repository().count().await?;
        let procedures = container.procedure_repository().count().await?;
        print_startup_info(container.config(), users, procedures);

        Ok(container)
    }
}

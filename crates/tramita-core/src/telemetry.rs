//! Logging bootstrap.
//!
//! Installs a `tracing` subscriber with an env filter and a console layer
//! in either human-readable or JSON format.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::TramitaResult;
use serde::{Deserialize, Serialize};

/// Output format of the console layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether to install a subscriber at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Filter directives used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Console output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Whether to print the event target.
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

fn default_enabled() -> bool {
    true
}

fn default_filter() -> String {
    "info,tramita=debug".to_string()
}

fn default_with_target() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            filter: default_filter(),
            format: LogFormat::default(),
            with_target: default_with_target(),
        }
    }
}

/// Initialize logging with the given configuration.
///
/// `RUST_LOG` takes precedence over [`LoggingConfig::filter`]. Fails if the
/// filter cannot be parsed. A global subscriber that is already installed is
/// left in place.
#[cfg(feature = "telemetry")]
pub fn init_tracing(config: &LoggingConfig) -> TramitaResult<()> {
    if !config.enabled {
        return Ok(());
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|e| {
            crate::TramitaError::Configuration(format!("Invalid log filter '{}': {}", config.filter, e))
        })?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(config.with_target))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(config.with_target))
            .try_init(),
    };
    if let Err(e) = result {
        tracing::debug!("Keeping the already installed subscriber: {}", e);
        return Ok(());
    }

    tracing::info!(
        filter = %config.filter,
        format = ?config.format,
        "Logging initialized"
    );

    Ok(())
}

/// Placeholder for when the telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_tracing(_config: &LoggingConfig) -> TramitaResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert!(config.enabled);
        assert_eq!(config.filter, "info,tramita=debug");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.with_target);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{"format": "json"}"#).unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.filter, "info,tramita=debug");
    }

    #[test]
    fn test_disabled_logging_is_a_no_op() {
        let config = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert!(init_tracing(&config).is_ok());
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn test_second_init_keeps_first_subscriber() {
        let config = LoggingConfig::default();
        assert!(init_tracing(&config).is_ok());
        assert!(init_tracing(&config).is_ok());
    }
}

//! Configuration validation.
//!
//! Collects every problem in one pass so a bad deployment reports all of
//! them at once.

use crate::{AppConfig, BootstrapConfig, SecurityConfig};
use thiserror::Error;
use tracing::warn;
use tramita_core::{TramitaError, TramitaResult};

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    /// Password hash cost is out of range.
    #[error("Invalid password hash cost: {value} MiB (must be between {minimum} and {maximum})")]
    InvalidHashCost { value: u32, minimum: u32, maximum: u32 },

    /// A required bootstrap admin field is empty.
    #[error("Bootstrap admin field '{field}' cannot be empty")]
    EmptyBootstrapField { field: &'static str },

    /// Application name is empty.
    #[error("Application name cannot be empty")]
    EmptyAppName,
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Minimum Argon2 memory cost in MiB.
    const MIN_HASH_COST: u32 = 1;
    /// Maximum Argon2 memory cost in MiB.
    const MAX_HASH_COST: u32 = 4096;

    /// Validates the entire application configuration.
    ///
    /// Returns `Ok(())` if valid, or `Err` with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if config.app.name.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyAppName);
        }
        Self::validate_security(&config.security, &mut errors);
        Self::validate_bootstrap(&config.bootstrap, &mut errors);

        if config.app.is_production() && config.bootstrap.admin.is_some() {
            warn!("Bootstrap admin is configured in production; rotate its password after first login");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates `config` and joins every problem into one
    /// `TramitaError::Configuration`.
    pub fn ensure_valid(config: &AppConfig) -> TramitaResult<()> {
        Self::validate(config).map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            TramitaError::Configuration(messages.join("; "))
        })
    }

    fn validate_security(config: &SecurityConfig, errors: &mut Vec<ConfigValidationError>) {
        if !(Self::MIN_HASH_COST..=Self::MAX_HASH_COST).contains(&config.password_hash_cost) {
            errors.push(ConfigValidationError::InvalidHashCost {
                value: config.password_hash_cost,
                minimum: Self::MIN_HASH_COST,
                maximum: Self::MAX_HASH_COST,
            });
        }
    }

    fn validate_bootstrap(config: &BootstrapConfig, errors: &mut Vec<ConfigValidationError>) {
        let Some(admin) = &config.admin else {
            return;
        };

        for (field, value) in [
            ("username", &admin.username),
            ("email", &admin.email),
            ("password", &admin.password),
        ] {
            if value.trim().is_empty() {
                errors.push(ConfigValidationError::EmptyBootstrapField { field });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BootstrapAdmin;

    fn admin(username: &str, password: &str) -> BootstrapAdmin {
        BootstrapAdmin {
            username: username.to_string(),
            email: "admin@example.com".to_string(),
            name: "Administrator".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_hash_cost_is_rejected() {
        let mut config = AppConfig::default();
        config.security.password_hash_cost = 0;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ConfigValidationError::InvalidHashCost {
                value: 0,
                minimum: 1,
                maximum: 4096
            }]
        );
    }

    #[test]
    fn test_bootstrap_admin_without_credentials() {
        let mut config = AppConfig::default();
        config.bootstrap.admin = Some(admin(" ", ""));

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors.contains(&ConfigValidationError::EmptyBootstrapField { field: "username" }));
        assert!(errors.contains(&ConfigValidationError::EmptyBootstrapField { field: "password" }));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_complete_bootstrap_admin_is_valid() {
        let mut config = AppConfig::default();
        config.bootstrap.admin = Some(admin("admin", "changeit"));
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_all_errors_are_collected() {
        let mut config = AppConfig::default();
        config.app.name = String::new();
        config.security.password_hash_cost = 0;
        config.bootstrap.admin = Some(admin("admin", ""));

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].to_string().contains("name"));
    }

    #[test]
    fn test_ensure_valid_joins_messages() {
        let mut config = AppConfig::default();
        config.app.name = String::new();
        config.security.password_hash_cost = 5000;

        match ConfigValidator::ensure_valid(&config).unwrap_err() {
            TramitaError::Configuration(msg) => {
                assert!(msg.contains("Application name"));
                assert!(msg.contains("5000"));
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
        assert!(ConfigValidator::ensure_valid(&AppConfig::default()).is_ok());
    }
}

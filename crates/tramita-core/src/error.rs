//! Unified error types for all layers of the application.

use std::fmt::Debug;
use thiserror::Error;

/// Raised when a mapper cannot resolve or construct its target type.
///
/// This is the only error a [`Mapper`](crate::Mapper) produces. It signals a
/// wiring bug for that type pair, so callers propagate it instead of retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Mapping configuration error: cannot map {source_type} -> {target_type}: {reason}")]
pub struct MappingConfigurationError {
    /// Fully qualified name of the value being converted.
    pub source_type: &'static str,
    /// Fully qualified name of the type that should have been produced.
    pub target_type: &'static str,
    /// What went wrong.
    pub reason: String,
}

impl MappingConfigurationError {
    /// Creates an error for a `S -> T` conversion.
    #[must_use]
    pub fn new<S: ?Sized, T: ?Sized>(reason: impl Into<String>) -> Self {
        Self {
            source_type: std::any::type_name::<S>(),
            target_type: std::any::type_name::<T>(),
            reason: reason.into(),
        }
    }
}

/// Unified error type for Tramita.
#[derive(Error, Debug)]
pub enum TramitaError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Conflict error (e.g., duplicate username)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Business rule violation
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Domain/transfer mapping could not be performed
    #[error(transparent)]
    MappingConfiguration(#[from] MappingConfigurationError),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TramitaError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::MappingConfiguration(_) => "MAPPING_CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates a business rule error.
    #[must_use]
    pub fn business_rule<T: Into<String>>(message: T) -> Self {
        Self::BusinessRule(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for errors caused by a wiring or setup bug.
    ///
    /// These fail identically on every attempt until the setup is fixed.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::MappingConfiguration(_))
    }
}

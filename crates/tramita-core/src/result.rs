//! Result type aliases for Tramita.

use crate::{MappingConfigurationError, TramitaError};

/// A specialized `Result` type for Tramita operations.
pub type TramitaResult<T> = Result<T, TramitaError>;

/// Result of a single mapper conversion.
pub type MappingResult<T> = Result<T, MappingConfigurationError>;

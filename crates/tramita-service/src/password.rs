//! Password hashing using Argon2.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use std::sync::Arc;
use tracing::debug;
use tramita_core::{TramitaError, TramitaResult};

/// Hashes and verifies user passwords.
pub trait PasswordEncoder: Send + Sync {
    /// Hashes a password with a fresh salt.
    fn hash(&self, password: &str) -> TramitaResult<String>;

    /// Verifies a password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> TramitaResult<bool>;
}

/// Argon2id password encoder.
#[derive(Clone)]
pub struct Argon2PasswordEncoder {
    argon2: Arc<Argon2<'static>>,
}

impl Argon2PasswordEncoder {
    /// Creates an encoder with the library's default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(Params::DEFAULT)
    }

    /// Creates an encoder with custom parameters.
    #[must_use]
    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Arc::new(Argon2::new(Algorithm::Argon2id, Version::V0x13, params)),
        }
    }

    /// Creates an encoder from a memory cost in MiB.
    ///
    /// Falls back to the default parameters if the cost is out of range.
    #[must_use]
    pub fn with_cost(cost: u32) -> Self {
        let params = cost
            .checked_mul(1024)
            .and_then(|memory_kib| Params::new(memory_kib, 3, 1, None).ok())
            .unwrap_or(Params::DEFAULT);

        Self::with_params(params)
    }
}

impl Default for Argon2PasswordEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Argon2PasswordEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Argon2PasswordEncoder").finish_non_exhaustive()
    }
}

impl PasswordEncoder for Argon2PasswordEncoder {
    fn hash(&self, password: &str) -> TramitaResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| TramitaError::internal(format!("Failed to hash password: {}", e)))?;

        debug!("Password hashed successfully");
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> TramitaResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| TramitaError::internal(format!("Invalid password hash format: {}", e)))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => {
                debug!("Password verification failed: incorrect password");
                Ok(false)
            }
            Err(e) => Err(TramitaError::internal(format!("Password verification error: {}", e))),
        }
    }
}

//! User role value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for unknown role names.
#[derive(Debug, Error)]
#[error("Unknown role: {0}")]
pub struct RoleError(String);

/// Roles a user account can hold.
///
/// Each account has exactly one role. Administrators manage accounts,
/// triadors register procedures and assign them, finalizadors work the
/// procedures assigned to them.
///
/// Serialized in upper case. Parsing ignores case and an optional `ROLE_`
/// prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    /// Account administrator.
    Admin,
    /// Registers procedures and assigns users to them.
    Triador,
    /// Completes procedures assigned to them.
    #[default]
    Finalizador,
}

impl Role {
    /// Returns all available roles.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Admin, Self::Triador, Self::Finalizador]
    }

    /// Returns the upper-case role name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Triador => "TRIADOR",
            Self::Finalizador => "FINALIZADOR",
        }
    }

    /// Returns true if users with this role may be assigned to procedures.
    #[must_use]
    pub const fn can_be_assigned(&self) -> bool {
        matches!(self, Self::Finalizador)
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        match upper.strip_prefix("ROLE_").unwrap_or(&upper) {
            "ADMIN" => Ok(Self::Admin),
            "TRIADOR" => Ok(Self::Triador),
            "FINALIZADOR" => Ok(Self::Finalizador),
            _ => Err(RoleError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = RoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! User entity.

use super::super::value_objects::Role;
use crate::{Entity, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Unique identifier, assigned when the user is stored.
    pub id: UserId,

    /// Unique login name.
    pub username: String,

    /// Unique e-mail address, compared case-insensitively.
    pub email: String,

    /// Display name.
    pub name: String,

    /// Hashed password (never serialized).
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// The account's role.
    pub role: Role,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, not yet stored user.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::UNASSIGNED,
            username: username.into(),
            email: email.into(),
            name: name.into(),
            password_hash: password_hash.into(),
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks if the user is an administrator.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    /// Returns true if the e-mail matches, ignoring case.
    #[must_use]
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }

    /// Stamps the entity as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Entity<UserId> for User {
    fn id(&self) -> &UserId {
        &self.id
    }
}

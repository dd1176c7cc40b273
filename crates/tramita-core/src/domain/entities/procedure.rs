//! Procedure entity.

use super::User;
use crate::{Entity, ProcedureId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workflow record registered by a triador and worked by the users
/// assigned to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Procedure {
    /// Unique identifier, assigned when the procedure is stored.
    pub id: ProcedureId,

    /// Short title.
    pub title: String,

    /// Free-form description.
    pub description: String,

    /// Users currently assigned, in assignment order.
    pub assigned_users: Vec<User>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Procedure {
    /// Creates a new, not yet stored procedure with no assignees.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ProcedureId::UNASSIGNED,
            title: title.into(),
            description: description.into(),
            assigned_users: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the assigned users.
    pub fn assign_users(&mut self, users: Vec<User>) {
        self.assigned_users = users;
        self.updated_at = Utc::now();
    }

    /// Returns the ids of the assigned users, in order.
    #[must_use]
    pub fn assigned_user_ids(&self) -> Vec<UserId> {
        self.assigned_users.iter().map(|u| u.id).collect()
    }

    /// Checks whether a user is assigned.
    #[must_use]
    pub fn is_assigned_to(&self, user_id: UserId) -> bool {
        self.assigned_users.iter().any(|u| u.id == user_id)
    }
}

impl Entity<ProcedureId> for Procedure {
    fn id(&self) -> &ProcedureId {
        &self.id
    }
}

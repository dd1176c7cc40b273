//! Procedure-related DTOs.

use super::UserResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tramita_core::{Procedure, ProcedureId, UserId};

/// Request to register a procedure or replace its assignees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcedureRequest {
    pub title: String,
    pub description: String,
    /// Users to assign, by ID.
    pub user_ids: Vec<UserId>,
}

/// Procedure response DTO with its assignees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcedureResponse {
    pub id: ProcedureId,
    pub title: String,
    pub description: String,
    pub users: Vec<UserResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Procedure> for ProcedureRequest {
    fn from(procedure: Procedure) -> Self {
        Self {
            user_ids: procedure.assigned_user_ids(),
            title: procedure.title,
            description: procedure.description,
        }
    }
}

/// Builds an unsaved procedure with no assignees. `user_ids` must be
/// resolved against the user store by the caller.
impl From<ProcedureRequest> for Procedure {
    fn from(request: ProcedureRequest) -> Self {
        Self::new(request.title, request.description)
    }
}

//! Procedure service trait definition.

use crate::dto::{ProcedureRequest, ProcedureResponse};
use async_trait::async_trait;
use tramita_core::{ProcedureId, TramitaResult, UserId};

/// Procedure registration and assignment.
///
/// Only users whose role can be assigned (finalizadors) may appear in a
/// procedure's user list.
#[async_trait]
pub trait ProcedureService: Send + Sync {
    /// Lists all procedures ordered by ID.
    async fn find_all(&self) -> TramitaResult<Vec<ProcedureResponse>>;

    /// Gets a procedure by ID.
    async fn find_by_id(&self, id: ProcedureId) -> TramitaResult<ProcedureResponse>;

    /// Registers a procedure assigned to the users named in `request`.
    async fn add(&self, request: ProcedureRequest) -> TramitaResult<ProcedureResponse>;

    /// Replaces a procedure's assignees with the users named in `request`.
    async fn update_user_list(&self, id: ProcedureId, request: ProcedureRequest) -> TramitaResult<ProcedureResponse>;

    /// Lists the procedures a user is assigned to.
    async fn find_assigned_to(&self, user_id: UserId) -> TramitaResult<Vec<ProcedureResponse>>;
}

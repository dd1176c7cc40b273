//! Procedure service implementation.

use crate::dto::{ProcedureRequest, ProcedureResponse};
use crate::mappers::Mappers;
use crate::procedure_service::ProcedureService;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tramita_core::{Procedure, ProcedureId, SharedMapper, TramitaError, TramitaResult, User, UserId};
use tramita_repository::{ProcedureRepository, UserRepository};

/// Procedure service backed by procedure and user repositories.
pub struct ProcedureServiceImpl {
    procedure_repository: Arc<dyn ProcedureRepository>,
    user_repository: Arc<dyn UserRepository>,
    procedure_mapper: SharedMapper<Procedure, ProcedureResponse>,
    request_mapper: SharedMapper<Procedure, ProcedureRequest>,
}

impl ProcedureServiceImpl {
    /// Creates a new procedure service.
    pub fn new(
        procedure_repository: Arc<dyn ProcedureRepository>,
        user_repository: Arc<dyn UserRepository>,
        mappers: &Mappers,
    ) -> Self {
        Self {
            procedure_repository,
            user_repository,
            procedure_mapper: Arc::clone(&mappers.procedure),
            request_mapper: Arc::clone(&mappers.procedure_request),
        }
    }

    async fn load(&self, id: ProcedureId) -> TramitaResult<Procedure> {
        self.procedure_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TramitaError::not_found("Procedure", id))
    }

    /// Looks up every user in `ids`, skipping repeated ids.
    ///
    /// Fails on the first unknown id or the first user whose role cannot be
    /// assigned.
    async fn resolve_assignees(&self, ids: &[UserId]) -> TramitaResult<Vec<User>> {
        let mut seen = HashSet::with_capacity(ids.len());
        let mut users = Vec::with_capacity(ids.len());

        for &id in ids {
            if !seen.insert(id) {
                continue;
            }

            let user = self
                .user_repository
                .find_by_id(id)
                .await?
                .ok_or_else(|| TramitaError::not_found("User", id))?;

            if !user.role.can_be_assigned() {
                warn!("Rejected assignment of user {} with role {}", user.id, user.role);
                return Err(TramitaError::business_rule(format!(
                    "User '{}' has role {} and cannot be assigned to a procedure",
                    user.username, user.role
                )));
            }

            users.push(user);
        }

        Ok(users)
    }
}

#[async_trait]
impl ProcedureService for ProcedureServiceImpl {
    async fn find_all(&self) -> TramitaResult<Vec<ProcedureResponse>> {
        debug!("Listing procedures");

        let procedures = self.procedure_repository.find_all().await?;
        Ok(self.procedure_mapper.to_transfer_list(procedures)?)
    }

    async fn find_by_id(&self, id: ProcedureId) -> TramitaResult<ProcedureResponse> {
        debug!("Getting procedure: {}", id);

        let procedure = self.load(id).await?;
        Ok(self.procedure_mapper.to_transfer(procedure)?)
    }

    async fn add(&self, request: ProcedureRequest) -> TramitaResult<ProcedureResponse> {
        debug!("Adding procedure '{}' for {} user(s)", request.title, request.user_ids.len());

        let assignees = self.resolve_assignees(&request.user_ids).await?;
        let mut procedure = self.request_mapper.to_domain(request)?;
        procedure.assign_users(assignees);

        let saved = self.procedure_repository.save(procedure).await?;

        info!("Procedure added: {} with {} assignee(s)", saved.id, saved.assigned_users.len());
        Ok(self.procedure_mapper.to_transfer(saved)?)
    }

    async fn update_user_list(&self, id: ProcedureId, request: ProcedureRequest) -> TramitaResult<ProcedureResponse> {
        debug!("Updating user list of procedure: {}", id);

        let mut procedure = self.load(id).await?;
        let assignees = self.resolve_assignees(&request.user_ids).await?;
        procedure.assign_users(assignees);

        let updated = self.procedure_repository.update(procedure).await?;

        info!("Procedure {} now has {} assignee(s)", id, updated.assigned_users.len());
        Ok(self.procedure_mapper.to_transfer(updated)?)
    }

    async fn find_assigned_to(&self, user_id: UserId) -> TramitaResult<Vec<ProcedureResponse>> {
        debug!("Listing procedures assigned to user: {}", user_id);

        if self.user_repository.find_by_id(user_id).await?.is_none() {
            return Err(TramitaError::not_found("User", user_id));
        }

        let procedures = self.procedure_repository.find_by_assigned_user(user_id).await?;
        Ok(self.procedure_mapper.to_transfer_list(procedures)?)
    }
}

impl std::fmt::Debug for ProcedureServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcedureServiceImpl").finish_non_exhaustive()
    }
}

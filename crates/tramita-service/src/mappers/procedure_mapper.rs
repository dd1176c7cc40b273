//! `Procedure` ↔ `ProcedureResponse` mapper.

use crate::dto::{ProcedureResponse, UserResponse};
use tramita_core::{Mapper, MappingResult, Procedure, SharedMapper, User};

/// Copies procedure fields directly and converts the assignees through a
/// shared user mapper, element by element.
#[derive(Clone)]
pub struct ProcedureMapper {
    users: SharedMapper<User, UserResponse>,
}

impl ProcedureMapper {
    /// Creates a procedure mapper that converts nested users with `users`.
    #[must_use]
    pub fn new(users: SharedMapper<User, UserResponse>) -> Self {
        Self { users }
    }
}

impl std::fmt::Debug for ProcedureMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcedureMapper").finish_non_exhaustive()
    }
}

impl Mapper for ProcedureMapper {
    type Domain = Procedure;
    type Transfer = ProcedureResponse;

    fn to_transfer(&self, procedure: Procedure) -> MappingResult<ProcedureResponse> {
        Ok(ProcedureResponse {
            id: procedure.id,
            title: procedure.title,
            description: procedure.description,
            users: self.users.to_transfer_list(procedure.assigned_users)?,
            created_at: procedure.created_at,
            updated_at: procedure.updated_at,
        })
    }

    fn to_domain(&self, response: ProcedureResponse) -> MappingResult<Procedure> {
        Ok(Procedure {
            id: response.id,
            title: response.title,
            description: response.description,
            assigned_users: self.users.to_domain_list(response.users)?,
            created_at: response.created_at,
            updated_at: response.updated_at,
        })
    }
}

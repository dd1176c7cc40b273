//! Entity-DTO mappers.
//!
//! Field-by-field conversions live in `From` impls on the DTOs; this module
//! binds them to [`Mapper`] type pairs and bundles the shared handles the
//! services are built with.

mod procedure_mapper;

pub use procedure_mapper::ProcedureMapper;

use crate::dto::{ProcedureRequest, ProcedureResponse, SignupRequest, UserResponse};
use std::sync::Arc;
use tramita_core::{ConvertMapper, Procedure, SharedMapper, User};

/// `User` ↔ `UserResponse`.
pub type UserMapper = ConvertMapper<User, UserResponse>;

/// `User` ↔ `SignupRequest`. Passwords are not copied in either direction.
pub type SignupMapper = ConvertMapper<User, SignupRequest>;

/// `Procedure` ↔ `ProcedureRequest`. Assignees are not resolved.
pub type ProcedureRequestMapper = ConvertMapper<Procedure, ProcedureRequest>;

/// One shared mapper per type pair, built once at startup.
#[derive(Clone)]
pub struct Mappers {
    pub user: SharedMapper<User, UserResponse>,
    pub signup: SharedMapper<User, SignupRequest>,
    pub procedure: SharedMapper<Procedure, ProcedureResponse>,
    pub procedure_request: SharedMapper<Procedure, ProcedureRequest>,
}

impl Mappers {
    /// Builds the default mapper set.
    #[must_use]
    pub fn new() -> Self {
        let user: SharedMapper<User, UserResponse> = Arc::new(UserMapper::new());
        Self {
            procedure: Arc::new(ProcedureMapper::new(Arc::clone(&user))),
            user,
            signup: Arc::new(SignupMapper::new()),
            procedure_request: Arc::new(ProcedureRequestMapper::new()),
        }
    }
}

impl Default for Mappers {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Mappers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mappers").finish_non_exhaustive()
    }
}

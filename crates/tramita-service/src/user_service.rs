//! User service trait definition.

use crate::dto::{SignupRequest, UserRequest, UserResponse};
use async_trait::async_trait;
use tramita_core::{TramitaResult, UserId};

/// User account management.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists all users ordered by ID.
    async fn find_all(&self) -> TramitaResult<Vec<UserResponse>>;

    /// Gets a user by ID.
    async fn find_by_id(&self, id: UserId) -> TramitaResult<UserResponse>;

    /// Registers a new user, hashing the password.
    async fn register(&self, request: SignupRequest) -> TramitaResult<UserResponse>;

    /// Applies the fields present in `request` to a stored user.
    async fn update(&self, id: UserId, request: UserRequest) -> TramitaResult<UserResponse>;

    /// Deletes a user.
    async fn delete_by_id(&self, id: UserId) -> TramitaResult<()>;
}

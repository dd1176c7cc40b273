//! User service implementation.

use crate::dto::{SignupRequest, UserRequest, UserResponse};
use crate::mappers::Mappers;
use crate::password::PasswordEncoder;
use crate::user_service::UserService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use tramita_core::{SharedMapper, TramitaError, TramitaResult, User, UserId};
use tramita_repository::UserRepository;

/// User service backed by a [`UserRepository`].
pub struct UserServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    password_encoder: Arc<dyn PasswordEncoder>,
    user_mapper: SharedMapper<User, UserResponse>,
    signup_mapper: SharedMapper<User, SignupRequest>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_encoder: Arc<dyn PasswordEncoder>,
        mappers: &Mappers,
    ) -> Self {
        Self {
            user_repository,
            password_encoder,
            user_mapper: Arc::clone(&mappers.user),
            signup_mapper: Arc::clone(&mappers.signup),
        }
    }

    async fn load(&self, id: UserId) -> TramitaResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TramitaError::not_found("User", id))
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn find_all(&self) -> TramitaResult<Vec<UserResponse>> {
        debug!("Listing users");

        let users = self.user_repository.find_all().await?;
        Ok(self.user_mapper.to_transfer_list(users)?)
    }

    async fn find_by_id(&self, id: UserId) -> TramitaResult<UserResponse> {
        debug!("Getting user: {}", id);

        let user = self.load(id).await?;
        Ok(self.user_mapper.to_transfer(user)?)
    }

    async fn register(&self, request: SignupRequest) -> TramitaResult<UserResponse> {
        debug!("Registering user: {}", request.username);

        if self.user_repository.exists_by_username(&request.username).await? {
            return Err(TramitaError::conflict(format!(
                "Username '{}' already exists",
                request.username
            )));
        }

        if self.user_repository.exists_by_email(&request.email).await? {
            return Err(TramitaError::conflict(format!(
                "Email '{}' already exists",
                request.email
            )));
        }

        let password_hash = self.password_encoder.hash(&request.password)?;
        let mut user = self.signup_mapper.to_domain(request)?;
        user.password_hash = password_hash;

        let saved_user = self.user_repository.save(user).await?;

        info!("User registered: {} as {}", saved_user.id, saved_user.role);
        Ok(self.user_mapper.to_transfer(saved_user)?)
    }

    async fn update(&self, id: UserId, request: UserRequest) -> TramitaResult<UserResponse> {
        debug!("Updating user: {}", id);

        let mut user = self.load(id).await?;

        if let Some(username) = request.username.as_deref() {
            if username != user.username && self.user_repository.exists_by_username(username).await? {
                return Err(TramitaError::conflict(format!("Username '{}' already exists", username)));
            }
        }

        if let Some(email) = request.email.as_deref() {
            if !user.has_email(email) && self.user_repository.exists_by_email(email).await? {
                return Err(TramitaError::conflict(format!("Email '{}' already exists", email)));
            }
        }

        request.apply_to(&mut user);
        let updated_user = self.user_repository.update(user).await?;

        info!("User updated: {}", id);
        Ok(self.user_mapper.to_transfer(updated_user)?)
    }

    async fn delete_by_id(&self, id: UserId) -> TramitaResult<()> {
        debug!("Deleting user: {}", id);

        if !self.user_repository.delete(id).await? {
            return Err(TramitaError::not_found("User", id));
        }

        info!("User deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}

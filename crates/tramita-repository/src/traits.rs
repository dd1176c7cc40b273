//! Repository trait definitions.

use async_trait::async_trait;
use tramita_core::{Procedure, ProcedureId, TramitaResult, User, UserId};

/// User repository trait.
///
/// Usernames and e-mails are unique; e-mails compare case-insensitively.
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> TramitaResult<Option<User>>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> TramitaResult<Option<User>>;

    /// Finds a user by e-mail.
    async fn find_by_email(&self, email: &str) -> TramitaResult<Option<User>>;

    /// Lists all users ordered by ID.
    async fn find_all(&self) -> TramitaResult<Vec<User>>;

    /// Checks if a username exists.
    async fn exists_by_username(&self, username: &str) -> TramitaResult<bool>;

    /// Checks if an e-mail exists.
    async fn exists_by_email(&self, email: &str) -> TramitaResult<bool>;

    /// Stores a new user and returns it with its assigned ID.
    ///
    /// Fails with `Conflict` if the username or e-mail is taken.
    async fn save(&self, user: User) -> TramitaResult<User>;

    /// Replaces a stored user.
    ///
    /// Fails with `NotFound` if the user is not stored and with `Conflict`
    /// if the new username or e-mail belongs to another user.
    async fn update(&self, user: User) -> TramitaResult<User>;

    /// Deletes a user by ID. Returns false if nothing was deleted.
    async fn delete(&self, id: UserId) -> TramitaResult<bool>;

    /// Counts all users.
    async fn count(&self) -> TramitaResult<u64>;
}

/// Procedure repository trait.
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait ProcedureRepository: Send + Sync {
    /// Finds a procedure by ID.
    async fn find_by_id(&self, id: ProcedureId) -> TramitaResult<Option<Procedure>>;

    /// Lists all procedures ordered by ID.
    async fn find_all(&self) -> TramitaResult<Vec<Procedure>>;

    /// Lists the procedures a user is assigned to, ordered by ID.
    async fn find_by_assigned_user(&self, user_id: UserId) -> TramitaResult<Vec<Procedure>>;

    /// Stores a new procedure and returns it with its assigned ID.
    async fn save(&self, procedure: Procedure) -> TramitaResult<Procedure>;

    /// Replaces a stored procedure. Fails with `NotFound` if it is not stored.
    async fn update(&self, procedure: Procedure) -> TramitaResult<Procedure>;

    /// Counts all procedures.
    async fn count(&self) -> TramitaResult<u64>;
}

//! In-memory user repository.

use super::table::Table;
use crate::UserRepository;
use async_trait::async_trait;
use tracing::debug;
use tramita_core::{TramitaError, TramitaResult, User, UserId};

/// User repository backed by process memory.
pub struct InMemoryUserRepository {
    users: Table<UserId, User>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self { users: Table::new() }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUserRepository")
            .field("users", &self.users.len())
            .finish()
    }
}

fn clashes_with(user: &User) -> impl Fn(&User) -> bool + '_ {
    move |existing| existing.username == user.username || existing.has_email(&user.email)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> TramitaResult<Option<User>> {
        Ok(self.users.get(id))
    }

    async fn find_by_username(&self, username: &str) -> TramitaResult<Option<User>> {
        Ok(self.users.find(|u| u.username == username))
    }

    async fn find_by_email(&self, email: &str) -> TramitaResult<Option<User>> {
        Ok(self.users.find(|u| u.has_email(email)))
    }

    async fn find_all(&self) -> TramitaResult<Vec<User>> {
        Ok(self.users.all())
    }

    async fn exists_by_username(&self, username: &str) -> TramitaResult<bool> {
        Ok(self.users.any(|u| u.username == username))
    }

    async fn exists_by_email(&self, email: &str) -> TramitaResult<bool> {
        Ok(self.users.any(|u| u.has_email(email)))
    }

    async fn save(&self, user: User) -> TramitaResult<User> {
        let probe = user.clone();
        let saved = self
            .users
            .insert_unless(user, |u, id| u.id = id, clashes_with(&probe))
            .map_err(|u| {
                TramitaError::conflict(format!("Username '{}' or email '{}' already exists", u.username, u.email))
            })?;

        debug!("Stored user {} as {}", saved.username, saved.id);
        Ok(saved)
    }

    async fn update(&self, user: User) -> TramitaResult<User> {
        let id = user.id;
        let probe = user.clone();
        match self.users.replace_unless(user, clashes_with(&probe)) {
            Ok(Some(updated)) => Ok(updated),
            Ok(None) => Err(TramitaError::not_found("User", id)),
            Err(u) => Err(TramitaError::conflict(format!(
                "Username '{}' or email '{}' already exists",
                u.username, u.email
            ))),
        }
    }

    async fn delete(&self, id: UserId) -> TramitaResult<bool> {
        Ok(self.users.remove(id))
    }

    async fn count(&self) -> TramitaResult<u64> {
        Ok(self.users.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tramita_core::Role;

    fn create_test_user(username: &str, email: &str) -> User {
        User::new(username, email, "Test User", "hashed_password", Role::Finalizador)
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.save(create_test_user("ana", "ana@example.com")).await.unwrap();
        let second = repo.save(create_test_user("bia", "bia@example.com")).await.unwrap();

        assert_eq!(first.id, UserId::new(1));
        assert_eq!(second.id, UserId::new(2));
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(create_test_user("ana", "ana@example.com")).await.unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_by_id(UserId::new(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_username_and_email() {
        let repo = InMemoryUserRepository::new();
        repo.save(create_test_user("ana", "ana@example.com")).await.unwrap();

        let by_name = repo.find_by_username("ana").await.unwrap();
        assert!(by_name.is_some());

        let by_email = repo.find_by_email("ANA@example.com").await.unwrap();
        assert_eq!(by_email.unwrap().username, "ana");

        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_exists_checks() {
        let repo = InMemoryUserRepository::new();
        repo.save(create_test_user("ana", "ana@example.com")).await.unwrap();

        assert!(repo.exists_by_username("ana").await.unwrap());
        assert!(!repo.exists_by_username("bia").await.unwrap());
        assert!(repo.exists_by_email("Ana@Example.com").await.unwrap());
        assert!(!repo.exists_by_email("bia@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_save_duplicate_username_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.save(create_test_user("ana", "ana@example.com")).await.unwrap();

        let result = repo.save(create_test_user("ana", "other@example.com")).await;
        assert!(matches!(result, Err(TramitaError::Conflict(_))));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_duplicate_email_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.save(create_test_user("ana", "ana@example.com")).await.unwrap();

        let result = repo.save(create_test_user("bia", "ANA@EXAMPLE.COM")).await;
        assert!(matches!(result, Err(TramitaError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_rejected_save_does_not_consume_an_id() {
        let repo = InMemoryUserRepository::new();
        repo.save(create_test_user("ana", "ana@example.com")).await.unwrap();
        assert!(repo.save(create_test_user("ana", "other@example.com")).await.is_err());
        assert!(repo.save(create_test_user("bia", "ana@example.com")).await.is_err());

        let bia = repo.save(create_test_user("bia", "bia@example.com")).await.unwrap();
        assert_eq!(bia.id, UserId::new(2));
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let repo = InMemoryUserRepository::new();
        for name in ["c", "a", "b"] {
            repo.save(create_test_user(name, &format!("{}@example.com", name)))
                .await
                .unwrap();
        }

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_update_existing_user() {
        let repo = InMemoryUserRepository::new();
        let mut user = repo.save(create_test_user("ana", "ana@example.com")).await.unwrap();

        user.name = "Ana Maria".to_string();
        let updated = repo.update(user.clone()).await.unwrap();
        assert_eq!(updated.name, "Ana Maria");
        assert_eq!(repo.find_by_id(user.id).await.unwrap().unwrap().name, "Ana Maria");
    }

    #[tokio::test]
    async fn test_update_keeping_own_username_is_allowed() {
        let repo = InMemoryUserRepository::new();
        let user = repo.save(create_test_user("ana", "ana@example.com")).await.unwrap();
        assert!(repo.update(user).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_to_taken_username_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.save(create_test_user("ana", "ana@example.com")).await.unwrap();
        let mut bia = repo.save(create_test_user("bia", "bia@example.com")).await.unwrap();

        bia.username = "ana".to_string();
        let result = repo.update(bia).await;
        assert!(matches!(result, Err(TramitaError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let mut ghost = create_test_user("ghost", "ghost@example.com");
        ghost.id = UserId::new(42);

        let result = repo.update(ghost).await;
        assert!(matches!(result, Err(TramitaError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();
        let user = repo.save(create_test_user("ana", "ana@example.com")).await.unwrap();

        assert!(repo.delete(user.id).await.unwrap());
        assert!(!repo.delete(user.id).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}

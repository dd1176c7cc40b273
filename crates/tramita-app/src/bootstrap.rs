//! Startup data seeding.

use crate::di::{AppContainer, RepositoryResolver, ServiceResolver};
use tracing::{debug, info};
use tramita_core::{Role, TramitaResult};
use tramita_service::{SignupRequest, UserResponse};

/// Registers the configured administrator unless a user with that username
/// already exists.
///
/// Returns the new account, or `None` when nothing was seeded.
pub async fn seed_admin(container: &AppContainer) -> TramitaResult<Option<UserResponse>> {
    let Some(admin) = container.config().bootstrap.admin.clone() else {
        debug!("No bootstrap admin configured");
        return Ok(None);
    };

    if container
        .user_repository()
        .exists_by_username(&admin.username)
        .await?
    {
        debug!("Bootstrap admin '{}' already present", admin.username);
        return Ok(None);
    }

    let name = if admin.name.is_empty() {
        admin.username.clone()
    } else {
        admin.name
    };

    let created = container
        .user_service()
        .register(SignupRequest {
            username: admin.username,
            email: admin.email,
            name,
            password: admin.password,
            role: Role::Admin,
        })
        .await?;

    info!("Seeded bootstrap admin: {} ({})", created.username, created.id);
    Ok(Some(created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::di::SecurityResolver;
    use tramita_config::{AppConfig, BootstrapAdmin};
    use tramita_core::TramitaError;

    fn config_with_admin(email: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.security.password_hash_cost = 1;
        config.bootstrap.admin = Some(BootstrapAdmin {
            username: "admin".to_string(),
            email: email.to_string(),
            name: String::new(),
            password: "changeit".to_string(),
        });
        config
    }

    #[tokio::test]
    async fn test_seeds_admin_once() {
        let container = AppContainer::from_config(config_with_admin("admin@example.com"));

        let created = seed_admin(&container).await.unwrap().unwrap();
        assert_eq!(created.role, Role::Admin);
        assert_eq!(created.name, "admin");

        assert!(seed_admin(&container).await.unwrap().is_none());
        assert_eq!(container.user_repository().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_seeded_password_verifies() {
        let container = AppContainer::from_config(config_with_admin("admin@example.com"));
        seed_admin(&container).await.unwrap();

        let stored = container
            .user_repository()
            .find_by_username("admin")
            .await
            .unwrap()
            .unwrap();
        assert!(container
            .password_encoder()
            .verify("changeit", &stored.password_hash)
            .unwrap());
    }

    #[tokio::test]
    async fn test_nothing_to_seed() {
        let mut config = AppConfig::default();
        config.security.password_hash_cost = 1;
        let container = AppContainer::from_config(config);

        assert!(seed_admin(&container).await.unwrap().is_none());
        assert_eq!(container.user_repository().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_email_taken_by_other_user_conflicts() {
        let container = AppContainer::from_config(config_with_admin("taken@example.com"));
        container
            .user_service()
            .register(SignupRequest {
                username: "someone".to_string(),
                email: "taken@example.com".to_string(),
                name: "Someone".to_string(),
                password: "pw".to_string(),
                role: Role::Triador,
            })
            .await
            .unwrap();

        let result = seed_admin(&container).await;
        assert!(matches!(result, Err(TramitaError::Conflict(_))));
    }
}

//! Dependency wiring.
//!
//! [`AppContainer`] owns one instance of every component: repositories,
//! the password encoder and the services built on top of them. The services
//! share one mapper set. Components are handed out as `Arc<dyn Trait>`
//! clones.

use std::sync::Arc;
use tramita_config::AppConfig;
use tramita_repository::{
    InMemoryProcedureRepository, InMemoryUserRepository, ProcedureRepository, UserRepository,
};
use tramita_service::{
    Argon2PasswordEncoder, Mappers, PasswordEncoder, ProcedureService, ProcedureServiceImpl,
    UserService, UserServiceImpl,
};
use tracing::debug;

/// Fully wired application components.
#[derive(Clone)]
pub struct AppContainer {
    config: Arc<AppConfig>,
    user_repository: Arc<dyn UserRepository>,
    procedure_repository: Arc<dyn ProcedureRepository>,
    password_encoder: Arc<dyn PasswordEncoder>,
    user_service: Arc<dyn UserService>,
    procedure_service: Arc<dyn ProcedureService>,
}

impl AppContainer {
    /// Starts building a container.
    #[must_use]
    pub fn builder() -> AppContainerBuilder {
        AppContainerBuilder::new()
    }

    /// Builds a container with default components for `config`.
    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        AppContainerBuilder::new().with_config(config).build()
    }

    /// Returns the configuration the container was built from.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContainer")
            .field("app", &self.config.app.name)
            .finish_non_exhaustive()
    }
}

/// Builder for [`AppContainer`].
///
/// Any component left unset is created from the configuration.
#[derive(Default)]
pub struct AppContainerBuilder {
    config: Option<AppConfig>,
    user_repository: Option<Arc<dyn UserRepository>>,
    procedure_repository: Option<Arc<dyn ProcedureRepository>>,
    password_encoder: Option<Arc<dyn PasswordEncoder>>,
}

impl AppContainerBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Uses `repository` for user storage.
    #[must_use]
    pub fn with_user_repository(mut self, repository: Arc<dyn UserRepository>) -> Self {
        self.user_repository = Some(repository);
        self
    }

    /// Uses `repository` for procedure storage.
    #[must_use]
    pub fn with_procedure_repository(mut self, repository: Arc<dyn ProcedureRepository>) -> Self {
        self.procedure_repository = Some(repository);
        self
    }

    /// Uses `encoder` instead of an Argon2 encoder built from the configured cost.
    #[must_use]
    pub fn with_password_encoder(mut self, encoder: Arc<dyn PasswordEncoder>) -> Self {
        self.password_encoder = Some(encoder);
        self
    }

    /// Wires the container.
    #[must_use]
    pub fn build(self) -> AppContainer {
        let config = self.config.unwrap_or_default();

        let user_repository = self
            .user_repository
            .unwrap_or_else(|| Arc::new(InMemoryUserRepository::new()));
        let procedure_repository = self.procedure_repository.unwrap_or_else(|| {
            Arc::new(InMemoryProcedureRepository::new(Arc::clone(&user_repository)))
        });
        let password_encoder = self.password_encoder.unwrap_or_else(|| {
            Arc::new(Argon2PasswordEncoder::with_cost(config.security.password_hash_cost))
        });

        let mappers = Mappers::new();

        let user_service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(
            Arc::clone(&user_repository),
            Arc::clone(&password_encoder),
            &mappers,
        ));
        let procedure_service: Arc<dyn ProcedureService> = Arc::new(ProcedureServiceImpl::new(
            Arc::clone(&procedure_repository),
            Arc::clone(&user_repository),
            &mappers,
        ));

        debug!("Application container wired for {}", config.app.name);

        AppContainer {
            config: Arc::new(config),
            user_repository,
            procedure_repository,
            password_encoder,
            user_service,
            procedure_service,
        }
    }
}

// ============================================================================
// Resolution Helpers
// ============================================================================

/// Resolves services.
pub trait ServiceResolver {
    /// Resolves the user service.
    fn user_service(&self) -> Arc<dyn UserService>;

    /// Resolves the procedure service.
    fn procedure_service(&self) -> Arc<dyn ProcedureService>;
}

/// Resolves repositories.
pub trait RepositoryResolver {
    /// Resolves the user repository.
    fn user_repository(&self) -> Arc<dyn UserRepository>;

    /// Resolves the procedure repository.
    fn procedure_repository(&self) -> Arc<dyn ProcedureRepository>;
}

/// Resolves security components.
pub trait SecurityResolver {
    /// Resolves the password encoder.
    fn password_encoder(&self) -> Arc<dyn PasswordEncoder>;
}

impl ServiceResolver for AppContainer {
    fn user_service(&self) -> Arc<dyn UserService> {
        Arc::clone(&self.user_service)
    }

    fn procedure_service(&self) -> Arc<dyn ProcedureService> {
        Arc::clone(&self.procedure_service)
    }
}

impl RepositoryResolver for AppContainer {
    fn user_repository(&self) -> Arc<dyn UserRepository> {
        Arc::clone(&self.user_repository)
    }

    fn procedure_repository(&self) -> Arc<dyn ProcedureRepository> {
        Arc::clone(&self.procedure_repository)
    }
}

impl SecurityResolver for AppContainer {
    fn password_encoder(&self) -> Arc<dyn PasswordEncoder> {
        Arc::clone(&self.password_encoder)
    }
}

//! Application Startup
//!
//! Composition root: picks the repository backend from settings and wires
//! the use cases around it.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::use_cases::{
    CreateUserUseCase, CreateUserUseCaseImpl, GetUserByEmailUseCase, GetUserByEmailUseCaseImpl,
    GetUserUseCase, GetUserUseCaseImpl,
};
use crate::config::{RepositoryBackend, Settings};
use crate::domain::{UserRepository, UserService};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{InMemoryUserRepository, PgUserRepository};
use crate::telemetry;

/// Wired application, cheap to clone and share between tasks.
#[derive(Clone)]
pub struct Application {
    user_repo: Arc<dyn UserRepository>,
    create_user: Arc<dyn CreateUserUseCase>,
    get_user: Arc<dyn GetUserUseCase>,
    get_user_by_email: Arc<dyn GetUserByEmailUseCase>,
    settings: Arc<Settings>,
}

impl Application {
    /// Load settings, install the tracing subscriber, then build.
    pub async fn bootstrap() -> Result<Self> {
        let settings = Settings::load().context("failed to load configuration")?;
        telemetry::init_tracing(&settings.telemetry);
        tracing::info!(
            environment = %settings.environment,
            backend = ?settings.repository.backend,
            "Configuration loaded"
        );

        Self::build(settings).await
    }

    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let user_repo: Arc<dyn UserRepository> = match settings.repository.backend {
            RepositoryBackend::Memory => {
                tracing::info!("Using in-memory user repository");
                Arc::new(InMemoryUserRepository::new())
            }
            RepositoryBackend::Postgres => {
                let pool = database::create_pool(&settings.database)
                    .await
                    .context("failed to connect to PostgreSQL")?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&pool)
                        .await
                        .context("failed to run database migrations")?;
                    tracing::info!("Database migrations applied");
                }

                Arc::new(PgUserRepository::new(pool))
            }
        };

        Ok(Self::with_repository(user_repo, settings))
    }

    /// Wire the use cases around an existing repository.
    pub fn with_repository(user_repo: Arc<dyn UserRepository>, settings: Settings) -> Self {
        let user_service = UserService::new();

        Self {
            create_user: Arc::new(CreateUserUseCaseImpl::new(user_repo.clone(), user_service)),
            get_user: Arc::new(GetUserUseCaseImpl::new(user_repo.clone())),
            get_user_by_email: Arc::new(GetUserByEmailUseCaseImpl::new(user_repo.clone())),
            user_repo,
            settings: Arc::new(settings),
        }
    }

    /// Application backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryUserRepository::new()), Settings::in_memory())
    }

    pub fn create_user(&self) -> &dyn CreateUserUseCase {
        self.create_user.as_ref()
    }

    pub fn get_user(&self) -> &dyn GetUserUseCase {
        self.get_user.as_ref()
    }

    pub fn get_user_by_email(&self) -> &dyn GetUserByEmailUseCase {
        self.get_user_by_email.as_ref()
    }

    /// The repository shared by every use case.
    pub fn user_repository(&self) -> &Arc<dyn UserRepository> {
        &self.user_repo
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fake::faker::internet::en::SafeEmail;
use fake::Fake;

use user_management::config::Settings;
use user_management::domain::{Email, User, UserId, UserRepository};
use user_management::infrastructure::repositories::InMemoryUserRepository;
use user_management::shared::RepositoryError;
use user_management::startup::Application;

/// In-memory repository that records how often `save` was called.
#[derive(Default)]
pub struct SpyUserRepository {
    inner: InMemoryUserRepository,
    saves: AtomicUsize,
}

impl SpyUserRepository {
    pub fn save_calls(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl UserRepository for SpyUserRepository {
    async fn save(&self, user: &User) -> Result<User, RepositoryError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(user).await
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        self.inner.find_by_email(email).await
    }

    async fn delete(&self, id: &UserId) -> Result<(), RepositoryError> {
        self.inner.delete(id).await
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, RepositoryError> {
        self.inner.exists_by_email(email).await
    }

    async fn find_all_active_users(&self) -> Result<Vec<User>, RepositoryError> {
        self.inner.find_all_active_users().await
    }

    async fn count_users_created_after(&self, from: DateTime<Utc>) -> Result<u64, RepositoryError> {
        self.inner.count_users_created_after(from).await
    }
}

/// Test application wired to a spy repository.
pub struct TestApp {
    pub app: Application,
    pub repo: Arc<SpyUserRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        let repo = Arc::new(SpyUserRepository::default());
        let app = Application::with_repository(repo.clone(), Settings::in_memory());
        Self { app, repo }
    }
}

/// Test user credentials
pub struct TestUser {
    pub email: &'static str,
    pub name: &'static str,
    pub password: &'static str,
}

pub const TEST_USER: TestUser = TestUser {
    email: "john@example.com",
    name: "John Doe",
    password: "password123",
};

/// Generate a unique test email
pub fn unique_email() -> String {
    let email: String = SafeEmail().fake();
    format!("{}.{}", uuid::Uuid::new_v4().simple(), email)
}

//! Get User Use Cases
//!
//! Read-side lookups by id and by email.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::domain::{Email, User, UserId, UserRepository};

/// Look up a user by id.
#[derive(Debug, Clone)]
pub struct GetUserQuery {
    pub user_id: UserId,
}

impl GetUserQuery {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// Outcome of [`GetUserUseCase::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetUserResult {
    Found(User),
    NotFound,
    /// The repository failed; the cause has been logged.
    Unavailable,
}

/// Look up a user by raw email input.
#[derive(Debug, Clone)]
pub struct GetUserByEmailQuery {
    pub email: String,
}

impl GetUserByEmailQuery {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Outcome of [`GetUserByEmailUseCase::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetUserByEmailResult {
    Found(User),
    NotFound,
    InvalidEmail(String),
    /// The repository failed; the cause has been logged.
    Unavailable,
}

/// Get user by id use case trait
#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self, query: GetUserQuery) -> GetUserResult;
}

/// Get user by email use case trait
#[async_trait]
pub trait GetUserByEmailUseCase: Send + Sync {
    async fn execute(&self, query: GetUserByEmailQuery) -> GetUserByEmailResult;
}

/// GetUserUseCase implementation
pub struct GetUserUseCaseImpl<R>
where
    R: UserRepository + ?Sized,
{
    user_repo: Arc<R>,
}

impl<R> GetUserUseCaseImpl<R>
where
    R: UserRepository + ?Sized,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> GetUserUseCase for GetUserUseCaseImpl<R>
where
    R: UserRepository + ?Sized + 'static,
{
    async fn execute(&self, query: GetUserQuery) -> GetUserResult {
        match self.user_repo.find_by_id(&query.user_id).await {
            Ok(Some(user)) => GetUserResult::Found(user),
            Ok(None) => GetUserResult::NotFound,
            Err(e) => {
                error!(error = %e, user_id = %query.user_id, "User lookup by id failed");
                GetUserResult::Unavailable
            }
        }
    }
}

/// GetUserByEmailUseCase implementation
pub struct GetUserByEmailUseCaseImpl<R>
where
    R: UserRepository + ?Sized,
{
    user_repo: Arc<R>,
}

impl<R> GetUserByEmailUseCaseImpl<R>
where
    R: UserRepository + ?Sized,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> GetUserByEmailUseCase for GetUserByEmailUseCaseImpl<R>
where
    R: UserRepository + ?Sized + 'static,
{
    async fn execute(&self, query: GetUserByEmailQuery) -> GetUserByEmailResult {
        let email = match Email::new(query.email) {
            Ok(email) => email,
            Err(e) => {
                warn!(reason = %e, "User lookup rejected: invalid email");
                return GetUserByEmailResult::InvalidEmail(e.to_string());
            }
        };

        match self.user_repo.find_by_email(&email).await {
            Ok(Some(user)) => GetUserByEmailResult::Found(user),
            Ok(None) => GetUserByEmailResult::NotFound,
            Err(e) => {
                error!(error = %e, "User lookup by email failed");
                GetUserByEmailResult::Unavailable
            }
        }
    }
}

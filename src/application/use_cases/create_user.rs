//! Create User Use Case
//!
//! Validates raw input, applies the domain rules and persists a new user.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::{
    DuplicationCheckResult, Email, Password, User, UserId, UserRepository, UserService,
    UserValidationResult,
};
use crate::shared::error::DomainError;

/// Returned when the email belongs to another account.
pub const EMAIL_IN_USE: &str = "email already in use";

/// Returned for any storage failure; the cause is only logged.
pub const CREATE_USER_FAILED: &str = "error occurred while creating user";

/// Raw input for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub email: String,
    pub name: String,
    pub plain_password: String,
}

impl CreateUserCommand {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        plain_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            plain_password: plain_password.into(),
        }
    }
}

/// Outcome of [`CreateUserUseCase::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateUserResult {
    Success(UserId),
    Failure(Vec<String>),
}

/// Create user use case trait
#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    /// Run the creation workflow. Never fails; problems come back as
    /// [`CreateUserResult::Failure`].
    async fn execute(&self, command: CreateUserCommand) -> CreateUserResult;
}

/// CreateUserUseCase implementation
pub struct CreateUserUseCaseImpl<R>
where
    R: UserRepository + ?Sized,
{
    user_repo: Arc<R>,
    user_service: UserService,
}

impl<R> CreateUserUseCaseImpl<R>
where
    R: UserRepository + ?Sized,
{
    pub fn new(user_repo: Arc<R>, user_service: UserService) -> Self {
        Self {
            user_repo,
            user_service,
        }
    }
}

#[async_trait]
impl<R> CreateUserUseCase for CreateUserUseCaseImpl<R>
where
    R: UserRepository + ?Sized + 'static,
{
    async fn execute(&self, command: CreateUserCommand) -> CreateUserResult {
        // Value objects first; nothing touches storage until input is sane
        let email = match Email::new(command.email) {
            Ok(email) => email,
            Err(e) => {
                warn!(reason = %e, "User creation rejected: invalid email");
                return CreateUserResult::Failure(vec![e.to_string()]);
            }
        };
        let password = match Password::from_plain_text(&command.plain_password) {
            Ok(password) => password,
            Err(e) => return rejected_password(e),
        };

        match self
            .user_service
            .check_duplication(&email, self.user_repo.as_ref())
            .await
        {
            Ok(DuplicationCheckResult::Available) => {}
            Ok(DuplicationCheckResult::Duplicated(existing_id)) => {
                warn!(existing_user_id = %existing_id, "User creation rejected: email in use");
                return CreateUserResult::Failure(vec![EMAIL_IN_USE.to_string()]);
            }
            Err(e) => {
                error!(error = %e, "Duplicate email lookup failed");
                return CreateUserResult::Failure(vec![CREATE_USER_FAILED.to_string()]);
            }
        }

        let user = User::new(UserId::generate(), email, command.name, password);

        if let UserValidationResult::Invalid(errors) = self.user_service.validate_user(&user) {
            warn!(?errors, "User creation rejected: validation failed");
            return CreateUserResult::Failure(errors);
        }

        match self.user_repo.save(&user).await {
            Ok(saved) => {
                info!(user_id = %saved.id(), "User created");
                CreateUserResult::Success(*saved.id())
            }
            // Lost the race against a concurrent registration
            Err(e) if e.is_duplicate_email() => {
                warn!(error = %e, "User creation rejected: email claimed concurrently");
                CreateUserResult::Failure(vec![EMAIL_IN_USE.to_string()])
            }
            Err(e) => {
                error!(error = %e, user_id = %user.id(), "Failed to save user");
                CreateUserResult::Failure(vec![CREATE_USER_FAILED.to_string()])
            }
        }
    }
}

/// Only policy violations reach the caller verbatim; hasher failures are internal.
fn rejected_password(e: DomainError) -> CreateUserResult {
    match e {
        DomainError::PasswordHashing(cause) => {
            error!(error = %cause, "Password hashing failed");
            CreateUserResult::Failure(vec![CREATE_USER_FAILED.to_string()])
        }
        other => {
            warn!(reason = %other, "User creation rejected: invalid password");
            CreateUserResult::Failure(vec![other.to_string()])
        }
    }
}

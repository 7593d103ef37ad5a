//! User domain service.

use crate::domain::entities::{User, UserRepository};
use crate::domain::value_objects::{Email, UserId};
use crate::shared::error::RepositoryError;

/// Shortest acceptable user name, in characters.
pub const MIN_NAME_LENGTH: usize = 2;

/// Longest acceptable user name, in characters.
pub const MAX_NAME_LENGTH: usize = 50;

/// Failed login attempts at which an account gets locked.
pub const MAX_FAILED_LOGIN_ATTEMPTS: u32 = 5;

/// Outcome of [`UserService::validate_user`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationResult {
    Valid,
    /// Every failed rule, in rule order.
    Invalid(Vec<String>),
}

impl UserValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Outcome of [`UserService::check_duplication`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuplicationCheckResult {
    Available,
    Duplicated(UserId),
}

/// Stateless business rules spanning user accounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the business rules on a user's name.
    ///
    /// All rules run; each failure adds one message. The minimum-length rule
    /// is skipped for a blank name, which already reports itself as empty.
    pub fn validate_user(&self, user: &User) -> UserValidationResult {
        let name = user.name();
        let length = name.chars().count();
        let blank = name.trim().is_empty();
        let mut errors = Vec::new();

        if blank {
            errors.push("name must not be empty".to_string());
        }

        if !blank && length < MIN_NAME_LENGTH {
            errors.push(format!("name must be at least {} characters", MIN_NAME_LENGTH));
        }

        if length > MAX_NAME_LENGTH {
            errors.push(format!("name must not exceed {} characters", MAX_NAME_LENGTH));
        }

        if name.chars().any(|c| !c.is_alphanumeric() && c != ' ') {
            errors.push("name must not contain special characters".to_string());
        }

        if errors.is_empty() {
            UserValidationResult::Valid
        } else {
            UserValidationResult::Invalid(errors)
        }
    }

    /// Look up whether `email` is already taken.
    ///
    /// Advisory only: the repository enforces uniqueness again on `save`.
    pub async fn check_duplication<R>(
        &self,
        email: &Email,
        repository: &R,
    ) -> Result<DuplicationCheckResult, RepositoryError>
    where
        R: UserRepository + ?Sized,
    {
        let existing = repository.find_by_email(email).await?;

        Ok(match existing {
            Some(user) => DuplicationCheckResult::Duplicated(*user.id()),
            None => DuplicationCheckResult::Available,
        })
    }

    /// Users are related when their email domains match exactly.
    pub fn are_related_users(&self, a: &User, b: &User) -> bool {
        a.email().domain() == b.email().domain()
    }

    /// Lock after too many failed logins, or when the account went inactive.
    pub fn should_lock_account(&self, user: &User, failed_login_attempts: u32) -> bool {
        failed_login_attempts >= MAX_FAILED_LOGIN_ATTEMPTS || !user.is_active()
    }
}

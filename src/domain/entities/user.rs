//! User aggregate and repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::domain::value_objects::{Email, Password, UserId};
use crate::shared::error::{DomainError, RepositoryError};

/// Accounts older than this are no longer considered active.
pub fn active_period() -> Duration {
    Duration::days(365)
}

/// Minimum account age before the email address may be changed.
pub fn email_change_cooldown() -> Duration {
    Duration::hours(24)
}

/// A user account.
///
/// Fields are private; every state transition returns a new `User`.
/// The name is not validated here, see
/// [`UserService::validate_user`](crate::domain::services::UserService::validate_user).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    email: Email,
    name: String,
    /// Argon2 password hash
    #[serde(skip_serializing)]
    password: Password,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a brand new user stamped with the current time.
    pub fn new(id: UserId, email: Email, name: impl Into<String>, password: Password) -> Self {
        Self::restore(id, email, name, password, Utc::now())
    }

    /// Rebuild a user from stored state.
    pub fn restore(
        id: UserId,
        email: Email,
        name: impl Into<String>,
        password: Password,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            name: name.into(),
            password,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Return a copy of this user holding `new_password`.
    ///
    /// Fails with [`DomainError::SamePassword`] when `new_password` equals the
    /// current one.
    pub fn change_password(&self, new_password: Password) -> Result<Self, DomainError> {
        if new_password == self.password {
            return Err(DomainError::SamePassword);
        }

        Ok(Self {
            password: new_password,
            ..self.clone()
        })
    }

    /// Hash `plain_text` and swap it in, rejecting the current password.
    pub fn change_password_from_plain_text(&self, plain_text: &str) -> Result<Self, DomainError> {
        if self.password.matches(plain_text) {
            return Err(DomainError::SamePassword);
        }
        self.change_password(Password::from_plain_text(plain_text)?)
    }

    /// Whether the account was created less than a year ago.
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }

    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at < active_period()
    }

    /// Whether the account is at least a day old.
    pub fn can_change_email(&self) -> bool {
        self.can_change_email_at(Utc::now())
    }

    pub fn can_change_email_at(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at >= email_change_cooldown()
    }
}

/// Repository trait for User persistence.
///
/// Defined in the domain layer; implementations live in infrastructure.
/// Implementations own the email uniqueness constraint: `save` must refuse
/// an email already held by a different id with
/// [`RepositoryError::DuplicateEmail`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user or replace the one with the same id.
    async fn save(&self, user: &User) -> Result<User, RepositoryError>;

    /// Find a user by id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Find a user by exact email.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;

    /// Delete a user. Unknown ids are ignored.
    async fn delete(&self, id: &UserId) -> Result<(), RepositoryError>;

    /// Check whether an email is already registered.
    async fn exists_by_email(&self, email: &Email) -> Result<bool, RepositoryError>;

    /// All users for which [`User::is_active`] holds.
    async fn find_all_active_users(&self) -> Result<Vec<User>, RepositoryError>;

    /// Number of users created strictly after `from`.
    async fn count_users_created_after(&self, from: DateTime<Utc>) -> Result<u64, RepositoryError>;
}

//! Error Types
//!
//! Domain and storage errors shared across layers. Use cases never return
//! these to their callers; they are folded into result enums at the
//! application boundary.

/// Errors raised while constructing or transforming domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("{0}")]
    InvalidEmail(String),

    #[error("invalid user id: {0}")]
    InvalidId(String),

    #[error("{0}")]
    WeakPassword(String),

    #[error("password hash must not be empty")]
    InvalidHash,

    #[error("password hashing failed: {0}")]
    PasswordHashing(String),

    #[error("new password must differ from the current password")]
    SamePassword,
}

/// Errors reported by `UserRepository` implementations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The store refused the write because another user holds the email.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    /// True when the store rejected a write on the email uniqueness constraint.
    pub fn is_duplicate_email(&self) -> bool {
        matches!(self, RepositoryError::DuplicateEmail(_))
    }
}

//! Hashed password value object.

use std::fmt;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::shared::error::DomainError;

/// Minimum number of characters in a plaintext password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A password held only in its Argon2id PHC-string form.
///
/// Plaintext is accepted by [`Password::from_plain_text`] and hashed on the
/// spot; it is never stored. Two `Password` values are equal when their
/// hashes are equal, so hashing the same plaintext twice yields two
/// different values (distinct salts).
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

impl Password {
    /// Hash a plaintext password with a fresh random salt.
    pub fn from_plain_text(plain_text: &str) -> Result<Self, DomainError> {
        if plain_text.trim().is_empty() {
            return Err(DomainError::WeakPassword("password must not be empty".into()));
        }
        if plain_text.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::WeakPassword(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::PasswordHashing(e.to_string()))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap a hash loaded from storage. No hashing is performed.
    pub fn from_hashed(hash: impl Into<String>) -> Result<Self, DomainError> {
        let hash = hash.into();
        if hash.trim().is_empty() {
            return Err(DomainError::InvalidHash);
        }
        Ok(Self { hash })
    }

    /// Check a plaintext candidate against the stored hash.
    ///
    /// A hash that is not a valid PHC string never matches.
    pub fn matches(&self, candidate: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }

    /// The stored hash, for persistence adapters.
    pub fn as_hash(&self) -> &str {
        &self.hash
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

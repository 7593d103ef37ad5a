//! Email address value object.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::shared::error::DomainError;

/// Longest email address accepted, in characters.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// A validated email address.
///
/// The raw input is kept exactly as given: no trimming and no case folding.
/// Anything non-blank that contains an `@` and fits in
/// [`MAX_EMAIL_LENGTH`] characters is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validate and wrap a raw email string.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(DomainError::InvalidEmail("email must not be empty".into()));
        }
        if !raw.contains('@') {
            return Err(DomainError::InvalidEmail("email must contain '@'".into()));
        }
        if raw.chars().count() > MAX_EMAIL_LENGTH {
            return Err(DomainError::InvalidEmail(format!(
                "email must not exceed {} characters",
                MAX_EMAIL_LENGTH
            )));
        }

        Ok(Self(raw))
    }

    /// The part after the first `@`.
    pub fn domain(&self) -> &str {
        self.0
            .split_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

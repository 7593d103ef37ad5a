//! # Domain Value Objects
//!
//! Immutable value types that validate their input at construction and
//! compare by value.
//!
//! ## Value Objects
//!
//! - **Email**: non-blank address containing `@`, at most 254 characters
//! - **UserId**: random UUID identifier
//! - **Password**: Argon2id hash, never the plaintext

mod email;
mod password;
mod user_id;

pub use email::*;
pub use password::*;
pub use user_id::*;

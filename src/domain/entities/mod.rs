//! # Domain Entities
//!
//! - **User**: the aggregate root, built from the value objects
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod user;

pub use user::{active_period, email_change_cooldown, User, UserRepository};

#[cfg(test)]
pub use user::MockUserRepository;

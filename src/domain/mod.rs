//! # Domain Layer
//!
//! The core business rules for user accounts. It is independent of any
//! external framework or storage concern.
//!
//! ## Structure
//!
//! - **value_objects**: Email, UserId, Password
//! - **entities**: the User aggregate and its repository trait
//! - **services**: the UserService domain service
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or application layers
//! - Repository traits define data access contracts
//! - Entities encapsulate domain behavior and are never mutated in place

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
pub use value_objects::*;

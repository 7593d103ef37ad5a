//! # Domain Services
//!
//! Domain services encapsulate business logic that doesn't naturally
//! belong to a single entity.
//!
//! ## Services
//!
//! - **UserService**: name validation, duplicate email check, relatedness
//!   and account lockout rules

mod user_service;

pub use user_service::*;

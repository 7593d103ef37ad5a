//! # User Management Library
//!
//! A small user-management domain:
//! - Validated value objects (email, id, hashed password)
//! - A `User` aggregate with password change and activity rules
//! - A domain service for cross-account business rules
//! - Use cases that return result enums instead of errors
//!
//! ## Architecture
//!
//! The crate follows a layered (ports and adapters) structure:
//!
//! - **Domain Layer**: Value objects, the User aggregate, the repository port
//! - **Application Layer**: Use cases and DTOs
//! - **Infrastructure Layer**: In-memory and PostgreSQL repositories
//!
//! ## Module Structure
//!
//! ```text
//! user_management/
//! +-- config/         Configuration management
//! +-- domain/         Value objects, entities, domain services
//! +-- application/    Use cases and DTOs
//! +-- infrastructure/ Repository implementations, database pool
//! +-- shared/         Error types
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use user_management::application::use_cases::{CreateUserCommand, CreateUserResult};
//! use user_management::startup::Application;
//!
//! let app = Application::in_memory();
//! let command = CreateUserCommand::new("john@example.com", "John Doe", "password123");
//! match app.create_user().execute(command).await {
//!     CreateUserResult::Success(id) => println!("created {}", id),
//!     CreateUserResult::Failure(errors) => eprintln!("{:?}", errors),
//! }
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Shared utilities
pub mod shared;

// Application wiring
pub mod startup;

// Telemetry and observability
pub mod telemetry;

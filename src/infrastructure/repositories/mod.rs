//! Repository Implementations
//!
//! Concrete implementations of the repository traits defined in the
//! domain layer.
//!
//! ## Available Repositories
//!
//! - **InMemoryUserRepository** - process-local store, default backend
//! - **PgUserRepository** - PostgreSQL store with a unique email constraint
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use user_management::infrastructure::repositories::PgUserRepository;
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let user_repo = PgUserRepository::new(pool);
//! }
//! ```

pub mod memory_user_repository;
pub mod user_repository;

pub use memory_user_repository::InMemoryUserRepository;
pub use user_repository::PgUserRepository;

//! Infrastructure Layer
//!
//! Adapters for the domain ports:
//! - Database connection pool and migrations (PostgreSQL)
//! - Repository implementations (PostgreSQL, in-memory)

pub mod database;
pub mod repositories;

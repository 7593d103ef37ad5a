//! Application Layer
//!
//! Use cases and data transfer objects. This layer orchestrates the flow
//! between callers and the domain layer.

pub mod dto;
pub mod use_cases;

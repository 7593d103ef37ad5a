//! End-to-end use case workflows.

mod create_user_tests;
mod get_user_tests;

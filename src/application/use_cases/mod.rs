//! Use Cases
//!
//! Application services, one per business workflow. Each returns a result
//! enum instead of an error so callers match exhaustively.
//!
//! ## Available Use Cases
//!
//! - **CreateUserUseCase**: register a new account
//! - **GetUserUseCase**: fetch an account by id
//! - **GetUserByEmailUseCase**: fetch an account by email

pub mod create_user;
pub mod get_user;

pub use create_user::{
    CreateUserCommand, CreateUserResult, CreateUserUseCase, CreateUserUseCaseImpl,
    CREATE_USER_FAILED, EMAIL_IN_USE,
};
pub use get_user::{
    GetUserByEmailQuery, GetUserByEmailResult, GetUserByEmailUseCase, GetUserByEmailUseCaseImpl,
    GetUserQuery, GetUserResult, GetUserUseCase, GetUserUseCaseImpl,
};

//! Data Transfer Objects
//!
//! Serializable read models handed to whatever transport sits on top.

mod user;

pub use user::UserDto;

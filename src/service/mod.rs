//! Services combining repositories into the operations an HTTP layer calls.
//!
//! Services return the crate [`Error`](crate::error::Error) and hand back transport DTOs.

pub mod favorite;
pub mod user;

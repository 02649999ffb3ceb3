//! Transport models and database type aliases.
//!
//! - `api` - DTOs handed to an HTTP layer for building JSON responses
//! - `db` - Type aliases for the sea-orm entity models
//! - `serialize` - The flat `serialize()` projection of every entity

pub mod api;
pub mod db;
pub mod serialize;

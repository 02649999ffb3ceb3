//! Test fixture modules for database rows and in-memory models.
//!
//! - `user` - User rows
//! - `catalog` - Character, planet and starship rows
//! - `favorite` - Favorite join rows linking users to catalog items
//! - `factory` - In-memory models that never touch the database

pub mod catalog;
pub mod factory;
pub mod favorite;
pub mod user;

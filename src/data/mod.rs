//! Data access layer repositories.
//!
//! Each repository borrows a [`sea_orm::ConnectionTrait`], so it runs the same way against a
//! pooled connection or inside a transaction. Repositories return [`sea_orm::DbErr`]
//! unchanged; constraint violations surface as errors from the database.
//!
//! Deleting a user or catalog item relies on the `ON DELETE CASCADE` foreign keys of the
//! favorite tables to remove the join rows that reference it.

pub mod catalog;
pub mod favorite;
pub mod user;

//! Repositories for the favorite join tables.
//!
//! A favorite row links one user to one catalog item. Navigation between users and
//! catalog items happens through explicit lookups by foreign key rather than lazily
//! loaded relationships.

pub mod character;
pub mod planet;
pub mod starship;

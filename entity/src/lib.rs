//! sea-orm entities for the holocron favorites schema.

pub mod prelude;

pub mod character;
pub mod favorite_characters;
pub mod favorite_planets;
pub mod favorite_starships;
pub mod planet;
pub mod starship;
pub mod user;

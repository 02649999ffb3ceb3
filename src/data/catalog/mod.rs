//! Repositories for the media catalog: characters, planets and starships.

pub mod character;
pub mod planet;
pub mod starship;

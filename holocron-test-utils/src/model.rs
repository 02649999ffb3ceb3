//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holocron crate so fixtures and tests read the
//! same way.

pub type UserModel = entity::user::Model;

pub type CharacterModel = entity::character::Model;

pub type PlanetModel = entity::planet::Model;

pub type StarshipModel = entity::starship::Model;

pub type FavoriteCharacterModel = entity::favorite_characters::Model;

pub type FavoritePlanetModel = entity::favorite_planets::Model;

pub type FavoriteStarshipModel = entity::favorite_starships::Model;

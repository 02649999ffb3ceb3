//! Database model type aliases.
//!
//! This module provides type aliases for the sea-orm entity models used throughout the
//! crate, so signatures don't have to spell out the `entity` crate paths.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique email address, at most 120 characters
/// - `password` - Password as provided by the caller
/// - `is_active` - Whether the account is active
/// - `first_name` - Stored in the `firstName` column
/// - `last_name` - Stored in the `lastName` column
pub type UserModel = entity::user::Model;

/// Type alias for the character catalog model (`id`, `name`, `gender`, `height`).
pub type CharacterModel = entity::character::Model;

/// Type alias for the planet catalog model (`id`, `name`, `weather`).
pub type PlanetModel = entity::planet::Model;

/// Type alias for the starship catalog model (`id`, `name`, `color`).
pub type StarshipModel = entity::starship::Model;

/// Type alias for a user's favorite character row (`id`, `user_id`, `character_id`).
pub type FavoriteCharacterModel = entity::favorite_characters::Model;

/// Type alias for a user's favorite planet row (`id`, `user_id`, `planet_id`).
pub type FavoritePlanetModel = entity::favorite_planets::Model;

/// Type alias for a user's favorite starship row (`id`, `user_id`, `starship_id`).
pub type FavoriteStarshipModel = entity::favorite_starships::Model;

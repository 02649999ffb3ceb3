//! Factory functions for generating in-memory database models.
//!
//! These models never touch the database, which makes them suitable for unit tests of
//! serialization and display code.

use crate::model::{
    CharacterModel, FavoriteCharacterModel, FavoritePlanetModel, FavoriteStarshipModel,
    PlanetModel, StarshipModel, UserModel,
};

/// Create a mock user model.
///
/// # Arguments
/// - `id` - The user record ID
/// - `email` - The user's email address
pub fn mock_user_model(id: i32, email: &str) -> UserModel {
    UserModel {
        id,
        email: email.to_string(),
        password: "password".to_string(),
        is_active: true,
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
    }
}

pub fn mock_character_model(id: i32, name: &str) -> CharacterModel {
    CharacterModel {
        id,
        name: name.to_string(),
        gender: "female".to_string(),
        height: 150,
    }
}

pub fn mock_planet_model(id: i32, name: &str) -> PlanetModel {
    PlanetModel {
        id,
        name: name.to_string(),
        weather: "temperate".to_string(),
    }
}

pub fn mock_starship_model(id: i32, name: &str) -> StarshipModel {
    StarshipModel {
        id,
        name: name.to_string(),
        color: "grey".to_string(),
    }
}

pub fn mock_favorite_character_model(
    id: i32,
    user_id: i32,
    character_id: i32,
) -> FavoriteCharacterModel {
    FavoriteCharacterModel {
        id,
        user_id,
        character_id,
    }
}

pub fn mock_favorite_planet_model(id: i32, user_id: i32, planet_id: i32) -> FavoritePlanetModel {
    FavoritePlanetModel {
        id,
        user_id,
        planet_id,
    }
}

pub fn mock_favorite_starship_model(
    id: i32,
    user_id: i32,
    starship_id: i32,
) -> FavoriteStarshipModel {
    FavoriteStarshipModel {
        id,
        user_id,
        starship_id,
    }
}

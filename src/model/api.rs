use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::db::{
    CharacterModel, FavoriteCharacterModel, FavoritePlanetModel, FavoriteStarshipModel,
    PlanetModel, StarshipModel, UserModel,
};

/// The response when an error occurs with an API request
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A user account. The password is never part of the transport representation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub height: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub weather: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StarshipDto {
    pub id: i32,
    pub name: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteCharacterDto {
    pub id: i32,
    pub user_id: i32,
    pub character_id: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoritePlanetDto {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteStarshipDto {
    pub id: i32,
    pub user_id: i32,
    pub starship_id: i32,
}

/// Every catalog item a user has marked as a favorite
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesDto {
    pub user_id: i32,
    pub characters: Vec<CharacterDto>,
    pub planets: Vec<PlanetDto>,
    pub starships: Vec<StarshipDto>,
}

impl From<&UserModel> for UserDto {
    fn from(user: &UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            is_active: user.is_active,
        }
    }
}

impl From<&CharacterModel> for CharacterDto {
    fn from(character: &CharacterModel) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            gender: character.gender.clone(),
            height: character.height,
        }
    }
}

impl From<&PlanetModel> for PlanetDto {
    fn from(planet: &PlanetModel) -> Self {
        Self {
            id: planet.id,
            name: planet.name.clone(),
            weather: planet.weather.clone(),
        }
    }
}

impl From<&StarshipModel> for StarshipDto {
    fn from(starship: &StarshipModel) -> Self {
        Self {
            id: starship.id,
            name: starship.name.clone(),
            color: starship.color.clone(),
        }
    }
}

impl From<&FavoriteCharacterModel> for FavoriteCharacterDto {
    fn from(favorite: &FavoriteCharacterModel) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            character_id: favorite.character_id,
        }
    }
}

impl From<&FavoritePlanetModel> for FavoritePlanetDto {
    fn from(favorite: &FavoritePlanetModel) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
        }
    }
}

impl From<&FavoriteStarshipModel> for FavoriteStarshipDto {
    fn from(favorite: &FavoriteStarshipModel) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            starship_id: favorite.starship_id,
        }
    }
}

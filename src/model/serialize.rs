//! Flat key-value projection of every entity.
//!
//! [`ApiSerialize::serialize`] is the contract each entity offers to an HTTP layer: a JSON
//! object holding exactly the entity's documented fields, read from the model at call time.

use serde::Serialize;
use serde_json::{json, Value};

use crate::model::{
    api::{
        CharacterDto, FavoriteCharacterDto, FavoritePlanetDto, FavoriteStarshipDto, PlanetDto,
        StarshipDto, UserDto,
    },
    db::{
        CharacterModel, FavoriteCharacterModel, FavoritePlanetModel, FavoriteStarshipModel,
        PlanetModel, StarshipModel, UserModel,
    },
};

pub trait ApiSerialize {
    /// Typed transport representation of the entity
    type Dto: Serialize;

    fn to_dto(&self) -> Self::Dto;

    /// Project the entity into a flat JSON object
    fn serialize(&self) -> Value {
        json!(self.to_dto())
    }
}

macro_rules! impl_api_serialize {
    ($($model:ty => $dto:ty),+ $(,)?) => {
        $(
            impl ApiSerialize for $model {
                type Dto = $dto;

                fn to_dto(&self) -> Self::Dto {
                    <$dto>::from(self)
                }
            }
        )+
    };
}

impl_api_serialize! {
    UserModel => UserDto,
    CharacterModel => CharacterDto,
    PlanetModel => PlanetDto,
    StarshipModel => StarshipDto,
    FavoriteCharacterModel => FavoriteCharacterDto,
    FavoritePlanetModel => FavoritePlanetDto,
    FavoriteStarshipModel => FavoriteStarshipDto,
}

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        favorite::{
            character::FavoriteCharactersRepository, planet::FavoritePlanetsRepository,
            starship::FavoriteStarshipsRepository,
        },
        user::UserRepository,
    },
    error::Error,
    model::{
        api::{FavoriteCharacterDto, FavoritePlanetDto, FavoriteStarshipDto, UserFavoritesDto},
        serialize::ApiSerialize,
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a character as a favorite of a user
    ///
    /// Errors with a foreign key violation if the user or character does not exist.
    pub async fn add_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterDto, Error> {
        let favorite = FavoriteCharactersRepository::new(self.db)
            .create(user_id, character_id)
            .await?;

        tracing::debug!("User {} favorited character {}", user_id, character_id);

        Ok(favorite.to_dto())
    }

    pub async fn add_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetDto, Error> {
        let favorite = FavoritePlanetsRepository::new(self.db)
            .create(user_id, planet_id)
            .await?;

        tracing::debug!("User {} favorited planet {}", user_id, planet_id);

        Ok(favorite.to_dto())
    }

    pub async fn add_starship(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<FavoriteStarshipDto, Error> {
        let favorite = FavoriteStarshipsRepository::new(self.db)
            .create(user_id, starship_id)
            .await?;

        tracing::debug!("User {} favorited starship {}", user_id, starship_id);

        Ok(favorite.to_dto())
    }

    /// Removes a character from a user's favorites, `false` if it wasn't one
    pub async fn remove_character(&self, user_id: i32, character_id: i32) -> Result<bool, Error> {
        let result = FavoriteCharactersRepository::new(self.db)
            .delete_by_user_and_character(user_id, character_id)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn remove_planet(&self, user_id: i32, planet_id: i32) -> Result<bool, Error> {
        let result = FavoritePlanetsRepository::new(self.db)
            .delete_by_user_and_planet(user_id, planet_id)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn remove_starship(&self, user_id: i32, starship_id: i32) -> Result<bool, Error> {
        let result = FavoriteStarshipsRepository::new(self.db)
            .delete_by_user_and_starship(user_id, starship_id)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets every catalog item a user has marked as a favorite
    ///
    /// # Returns
    /// - `Some(UserFavoritesDto)` with items in the order they were favorited
    /// - `None` if the user does not exist
    pub async fn get_user_favorites(
        &self,
        user_id: i32,
    ) -> Result<Option<UserFavoritesDto>, Error> {
        if UserRepository::new(self.db).get(user_id).await?.is_none() {
            return Ok(None);
        }

        let characters = FavoriteCharactersRepository::new(self.db)
            .get_items_by_user_id(user_id)
            .await?
            .into_iter()
            .filter_map(|(_, character)| character)
            .map(|character| character.to_dto())
            .collect();

        let planets = FavoritePlanetsRepository::new(self.db)
            .get_items_by_user_id(user_id)
            .await?
            .into_iter()
            .filter_map(|(_, planet)| planet)
            .map(|planet| planet.to_dto())
            .collect();

        let starships = FavoriteStarshipsRepository::new(self.db)
            .get_items_by_user_id(user_id)
            .await?
            .into_iter()
            .filter_map(|(_, starship)| starship)
            .map(|starship| starship.to_dto())
            .collect();

        Ok(Some(UserFavoritesDto {
            user_id,
            characters,
            planets,
            starships,
        }))
    }
}

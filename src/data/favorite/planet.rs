use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct FavoritePlanetsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePlanetsRepository<'a, C> {
    /// Creates a new instance of [`FavoritePlanetsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks a planet as a favorite of a user
    ///
    /// Fails with a foreign key violation if either the user or the planet does not exist.
    pub async fn create(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite_planets::Model, DbErr> {
        let favorite = entity::favorite_planets::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get(
        &self,
        favorite_id: i32,
    ) -> Result<Option<entity::favorite_planets::Model>, DbErr> {
        entity::prelude::FavoritePlanets::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    /// Gets all favorite planet entries owned by the provided user ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite_planets::Model>, DbErr> {
        entity::prelude::FavoritePlanets::find()
            .filter(entity::favorite_planets::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_planets::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all favorite entries referencing the provided planet ID
    pub async fn get_many_by_planet_id(
        &self,
        planet_id: i32,
    ) -> Result<Vec<entity::favorite_planets::Model>, DbErr> {
        entity::prelude::FavoritePlanets::find()
            .filter(entity::favorite_planets::Column::PlanetId.eq(planet_id))
            .order_by_asc(entity::favorite_planets::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a user's favorite entries joined with the planet each one references
    ///
    /// The planet is `None` only on a connection that does not enforce foreign keys.
    pub async fn get_items_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::favorite_planets::Model, Option<entity::planet::Model>)>, DbErr> {
        entity::prelude::FavoritePlanets::find()
            .filter(entity::favorite_planets::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Planet)
            .order_by_asc(entity::favorite_planets::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoritePlanets::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    /// Removes every favorite entry linking the user to the planet
    pub async fn delete_by_user_and_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoritePlanets::delete_many()
            .filter(entity::favorite_planets::Column::UserId.eq(user_id))
            .filter(entity::favorite_planets::Column::PlanetId.eq(planet_id))
            .exec(self.db)
            .await
    }
}

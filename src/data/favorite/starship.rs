use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct FavoriteStarshipsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteStarshipsRepository<'a, C> {
    /// Creates a new instance of [`FavoriteStarshipsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks a starship as a favorite of a user
    ///
    /// Fails with a foreign key violation if either the user or the starship does not exist.
    pub async fn create(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<entity::favorite_starships::Model, DbErr> {
        let favorite = entity::favorite_starships::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            starship_id: ActiveValue::Set(starship_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get(
        &self,
        favorite_id: i32,
    ) -> Result<Option<entity::favorite_starships::Model>, DbErr> {
        entity::prelude::FavoriteStarships::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    /// Gets all favorite starship entries owned by the provided user ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite_starships::Model>, DbErr> {
        entity::prelude::FavoriteStarships::find()
            .filter(entity::favorite_starships::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_starships::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all favorite entries referencing the provided starship ID
    pub async fn get_many_by_starship_id(
        &self,
        starship_id: i32,
    ) -> Result<Vec<entity::favorite_starships::Model>, DbErr> {
        entity::prelude::FavoriteStarships::find()
            .filter(entity::favorite_starships::Column::StarshipId.eq(starship_id))
            .order_by_asc(entity::favorite_starships::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a user's favorite entries joined with the starship each one references
    ///
    /// The starship is `None` only on a connection that does not enforce foreign keys.
    pub async fn get_items_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::favorite_starships::Model, Option<entity::starship::Model>)>, DbErr> {
        entity::prelude::FavoriteStarships::find()
            .filter(entity::favorite_starships::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Starship)
            .order_by_asc(entity::favorite_starships::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteStarships::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    /// Removes every favorite entry linking the user to the starship
    pub async fn delete_by_user_and_starship(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteStarships::delete_many()
            .filter(entity::favorite_starships::Column::UserId.eq(user_id))
            .filter(entity::favorite_starships::Column::StarshipId.eq(starship_id))
            .exec(self.db)
            .await
    }
}

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct FavoriteCharactersRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteCharactersRepository<'a, C> {
    /// Creates a new instance of [`FavoriteCharactersRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks a character as a favorite of a user
    ///
    /// Fails with a foreign key violation if either the user or the character does not exist.
    pub async fn create(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<entity::favorite_characters::Model, DbErr> {
        let favorite = entity::favorite_characters::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get(
        &self,
        favorite_id: i32,
    ) -> Result<Option<entity::favorite_characters::Model>, DbErr> {
        entity::prelude::FavoriteCharacters::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    /// Gets all favorite character entries owned by the provided user ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite_characters::Model>, DbErr> {
        entity::prelude::FavoriteCharacters::find()
            .filter(entity::favorite_characters::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_characters::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all favorite entries referencing the provided character ID
    pub async fn get_many_by_character_id(
        &self,
        character_id: i32,
    ) -> Result<Vec<entity::favorite_characters::Model>, DbErr> {
        entity::prelude::FavoriteCharacters::find()
            .filter(entity::favorite_characters::Column::CharacterId.eq(character_id))
            .order_by_asc(entity::favorite_characters::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a user's favorite entries joined with the character each one references
    ///
    /// The character is `None` only on a connection that does not enforce foreign keys.
    pub async fn get_items_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::favorite_characters::Model, Option<entity::character::Model>)>, DbErr> {
        entity::prelude::FavoriteCharacters::find()
            .filter(entity::favorite_characters::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Character)
            .order_by_asc(entity::favorite_characters::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteCharacters::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    /// Removes every favorite entry linking the user to the character
    pub async fn delete_by_user_and_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteCharacters::delete_many()
            .filter(entity::favorite_characters::Column::UserId.eq(user_id))
            .filter(entity::favorite_characters::Column::CharacterId.eq(character_id))
            .exec(self.db)
            .await
    }
}

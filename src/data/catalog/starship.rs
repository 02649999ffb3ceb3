use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

pub struct StarshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarshipRepository<'a, C> {
    /// Creates a new instance of [`StarshipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str, color: &str) -> Result<entity::starship::Model, DbErr> {
        let starship = entity::starship::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            color: ActiveValue::Set(color.to_string()),
            ..Default::default()
        };

        starship.insert(self.db).await
    }

    pub async fn get(&self, starship_id: i32) -> Result<Option<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find_by_id(starship_id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find()
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the stored fields of a starship, `None` if it does not exist
    pub async fn update(
        &self,
        starship_id: i32,
        name: &str,
        color: &str,
    ) -> Result<Option<entity::starship::Model>, DbErr> {
        let starship = match entity::prelude::Starship::find_by_id(starship_id)
            .one(self.db)
            .await?
        {
            Some(starship) => starship,
            None => return Ok(None),
        };

        let mut starship_am = starship.into_active_model();
        starship_am.name = ActiveValue::Set(name.to_string());
        starship_am.color = ActiveValue::Set(color.to_string());

        let starship = starship_am.update(self.db).await?;

        Ok(Some(starship))
    }

    pub async fn delete(&self, starship_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Starship::delete_by_id(starship_id)
            .exec(self.db)
            .await
    }
}

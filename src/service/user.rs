use sea_orm::DatabaseConnection;

use crate::{
    data::user::{NewUser, UserRepository},
    error::Error,
    model::{api::UserDto, serialize::ApiSerialize},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user
    ///
    /// # Returns
    /// - [`UserDto`] of the created user
    /// - [`Error::DbErr`] if the email is already in use or the insert fails,
    ///   see [`Error::constraint_violation`]
    pub async fn create_user(&self, user: NewUser) -> Result<UserDto, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository.create(user).await?;

        tracing::debug!("Created user {}", user.id);

        Ok(user.to_dto())
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository.get(user_id).await?;

        Ok(user.map(|user| user.to_dto()))
    }

    /// Deletes a user and, through the database cascade, all of their favorites
    ///
    /// Returns `false` if no user with the ID exists.
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, Error> {
        let user_repository = UserRepository::new(self.db);

        let result = user_repository.delete(user_id).await?;
        let deleted = result.rows_affected > 0;

        if deleted {
            tracing::debug!("Deleted user {} and their favorites", user_id);
        }

        Ok(deleted)
    }
}

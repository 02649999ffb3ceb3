use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user named "Test User" with the provided email
    pub async fn insert_mock_user(&self, email: &str) -> Result<UserModel, TestError> {
        self.insert_user(email, "Test", "User").await
    }

    pub async fn insert_user(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<UserModel, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set("password".to_string()),
            is_active: ActiveValue::Set(true),
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }
}

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    constant::{TEST_EMAIL_DOMAIN, TEST_PASSWORD_HASH},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with the named role and a `{username}@pokedex.test` email.
    ///
    /// The stored password hash is a placeholder that never verifies.
    pub async fn insert_user(
        &self,
        username: &str,
        role: impl AsRef<str>,
    ) -> Result<entity::user::Model, TestError> {
        let role_name = role.as_ref();
        let role = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(role_name))
            .one(&self.setup.db)
            .await?
            .ok_or_else(|| TestError::Fixture(format!("role {role_name:?} is not seeded")))?;

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(format!("{username}@{TEST_EMAIL_DOMAIN}")),
            password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
            role_id: ActiveValue::Set(role.id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a trainer profile for an existing user.
    pub async fn insert_trainer(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<entity::trainer::Model, TestError> {
        Ok(entity::prelude::Trainer::insert(entity::trainer::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            age: ActiveValue::Set(Some(10)),
            region: ActiveValue::Set(Some("Kanto".to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a `user` role account along with a trainer named after it.
    pub async fn insert_user_with_trainer(
        &mut self,
        username: &str,
    ) -> Result<(entity::user::Model, entity::trainer::Model), TestError> {
        let user = self.insert_user(username, "user").await?;
        let trainer = self
            .insert_trainer(user.id, &format!("Trainer {username}"))
            .await?;

        Ok((user, trainer))
    }
}

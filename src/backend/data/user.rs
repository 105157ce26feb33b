use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};

use crate::{backend::util::logging::log_database_operation, model::user::Role};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Looks up the id of a seeded role
    pub async fn find_role(&self, role: Role) -> Result<Option<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(role.as_str()))
            .one(self.db)
            .await
    }

    /// Creates a new user; the password must already be hashed
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        role_id: i32,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            role_id: ActiveValue::Set(role_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let user = user.insert(self.db).await?;

        log_database_operation(
            "INSERT",
            "users",
            &format!("Created user {}", user.username),
        );

        Ok(user)
    }

    pub async fn get_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<(entity::user::Model, Option<entity::role::Model>)>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .find_also_related(entity::role::Entity)
            .one(self.db)
            .await
    }

    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<(entity::user::Model, Option<entity::role::Model>)>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .find_also_related(entity::role::Entity)
            .one(self.db)
            .await
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether `email` belongs to a user other than `user_id`
    pub async fn email_taken_by_other(&self, email: &str, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::Id.ne(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn update_email(
        &self,
        user_id: i32,
        email: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(user_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.email = ActiveValue::Set(email.to_string());
        let user = user_am.update(self.db).await?;

        log_database_operation("UPDATE", "users", &format!("Updated email of user {user_id}"));

        Ok(Some(user))
    }

    pub async fn update_password(
        &self,
        user_id: i32,
        password_hash: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(user_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.password_hash = ActiveValue::Set(password_hash.to_string());
        let user = user_am.update(self.db).await?;

        log_database_operation(
            "UPDATE",
            "users",
            &format!("Updated password of user {user_id}"),
        );

        Ok(Some(user))
    }

    pub async fn update_role(
        &self,
        user_id: i32,
        role_id: i32,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(user_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.role_id = ActiveValue::Set(role_id);
        let user = user_am.update(self.db).await?;

        log_database_operation(
            "UPDATE",
            "users",
            &format!("Set role {role_id} on user {user_id}"),
        );

        Ok(Some(user))
    }

    /// Deletes a user row only; dependent rows must be removed first
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        log_database_operation("DELETE", "users", &format!("Deleted user {user_id}"));

        Ok(result)
    }
}

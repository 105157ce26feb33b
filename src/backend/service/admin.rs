use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    backend::{
        data::{admin::AdminRepository, search::SearchRepository},
        error::{admin::AdminError, Error},
        util::logging::{log_security_event, log_user_activity},
    },
    model::{
        admin::{ActivityLogDto, AdminUserDto, SearchLogDto, SystemStatsDto, UserDetailsDto},
        user::Role,
    },
};

/// Rows shown in the activity and search log views.
pub const LOG_LIMIT: u64 = 100;

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    /// Creates a new instance of [`AdminService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_users(&self) -> Result<Vec<AdminUserDto>, Error> {
        Ok(AdminRepository::new(self.db).get_all_users().await?)
    }

    pub async fn get_user_details(&self, user_id: i32) -> Result<UserDetailsDto, Error> {
        AdminRepository::new(self.db)
            .get_user_details(user_id)
            .await?
            .ok_or_else(|| AdminError::UserNotFound(user_id).into())
    }

    /// Assign `role` to `user_id`
    ///
    /// Only `user` and `admin` are accepted, and an admin cannot remove their
    /// own admin role.
    pub async fn update_role(&self, admin_id: i32, user_id: i32, role: &str) -> Result<(), Error> {
        let role = role
            .trim()
            .parse::<Role>()
            .map_err(|_| AdminError::InvalidRole(role.to_string()))?;

        if user_id == admin_id && role != Role::Admin {
            return Err(AdminError::SelfDemotion.into());
        }

        if AdminRepository::new(self.db)
            .update_role(user_id, role)
            .await?
            .is_none()
        {
            return Err(AdminError::UserNotFound(user_id).into());
        }

        log_security_event(
            "role_changed",
            Some(admin_id),
            Some(&format!("Target user: {user_id} | New role: {role}")),
        );

        Ok(())
    }

    /// Delete another user's account with all dependent rows
    pub async fn delete_user(&self, admin_id: i32, user_id: i32) -> Result<(), Error> {
        if user_id == admin_id {
            return Err(AdminError::SelfDeletion.into());
        }

        if !AdminRepository::new(self.db).delete_user(user_id).await? {
            return Err(AdminError::UserNotFound(user_id).into());
        }

        log_user_activity(admin_id, "admin_delete_user", &format!("Deleted user {user_id}"));
        log_security_event(
            "user_deleted",
            Some(admin_id),
            Some(&format!("Target user: {user_id}")),
        );

        Ok(())
    }

    pub async fn get_system_stats(&self) -> Result<SystemStatsDto, Error> {
        Ok(AdminRepository::new(self.db)
            .get_system_stats(Utc::now().naive_utc())
            .await?)
    }

    pub async fn get_activity_logs(&self) -> Result<Vec<ActivityLogDto>, Error> {
        Ok(AdminRepository::new(self.db)
            .get_activity_logs(LOG_LIMIT)
            .await?)
    }

    pub async fn get_search_logs(&self) -> Result<Vec<SearchLogDto>, Error> {
        Ok(SearchRepository::new(self.db).get_logs(LOG_LIMIT).await?)
    }
}

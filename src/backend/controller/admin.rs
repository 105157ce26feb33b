use crate::{
    backend::{
        controller::util::require_admin::require_admin, model::app::AppState,
        service::admin::AdminService,
    },
    model::{
        admin::{ActivityLogDto, AdminUserDto, SearchLogDto, SystemStatsDto, UserDetailsDto},
        api::{ApiResult, Reply},
        user::Session,
    },
};

pub async fn list_users(state: &AppState, session: &Session) -> ApiResult<Vec<AdminUserDto>> {
    require_admin(session)?;

    let users = AdminService::new(&state.db).list_users().await?;

    Ok(Reply::new("Users retrieved successfully", users))
}

pub async fn get_user_details(
    state: &AppState,
    session: &Session,
    user_id: i32,
) -> ApiResult<UserDetailsDto> {
    require_admin(session)?;

    let details = AdminService::new(&state.db).get_user_details(user_id).await?;

    Ok(Reply::new("User details", details))
}

/// Set the role of a user to `user` or `admin`
pub async fn update_role(
    state: &AppState,
    session: &Session,
    user_id: i32,
    role: &str,
) -> ApiResult<()> {
    require_admin(session)?;

    AdminService::new(&state.db)
        .update_role(session.user_id, user_id, role)
        .await?;

    Ok(Reply::new("Role updated successfully", ()))
}

pub async fn delete_user(state: &AppState, session: &Session, user_id: i32) -> ApiResult<()> {
    require_admin(session)?;

    AdminService::new(&state.db)
        .delete_user(session.user_id, user_id)
        .await?;

    Ok(Reply::new("User deleted successfully", ()))
}

pub async fn get_system_stats(state: &AppState, session: &Session) -> ApiResult<SystemStatsDto> {
    require_admin(session)?;

    let stats = AdminService::new(&state.db).get_system_stats().await?;

    Ok(Reply::new("System statistics", stats))
}

pub async fn get_activity_logs(
    state: &AppState,
    session: &Session,
) -> ApiResult<Vec<ActivityLogDto>> {
    require_admin(session)?;

    let logs = AdminService::new(&state.db).get_activity_logs().await?;

    Ok(Reply::new("Recent activity", logs))
}

pub async fn get_search_logs(state: &AppState, session: &Session) -> ApiResult<Vec<SearchLogDto>> {
    require_admin(session)?;

    let logs = AdminService::new(&state.db).get_search_logs().await?;

    Ok(Reply::new("Search logs", logs))
}

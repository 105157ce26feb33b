use crate::{
    backend::{model::app::AppState, service::profile::ProfileService},
    model::{
        api::{ApiResult, Reply},
        team::TrainerStatsDto,
        user::{ChangePasswordForm, ProfileDto, ProfileForm, Session},
    },
};

pub async fn get_profile(state: &AppState, session: &Session) -> ApiResult<ProfileDto> {
    let profile_service = ProfileService::new(&state.db, &state.config.security);

    let profile = profile_service.get_profile(session.user_id).await?;

    Ok(Reply::new("Profile retrieved successfully", profile))
}

/// Save account email and trainer fields; creates the trainer on first save
pub async fn update_profile(
    state: &AppState,
    session: &Session,
    form: ProfileForm,
) -> ApiResult<ProfileDto> {
    let profile_service = ProfileService::new(&state.db, &state.config.security);

    let profile = profile_service
        .update_profile(session.user_id, &form)
        .await?;

    Ok(Reply::new("Profile updated successfully", profile))
}

pub async fn change_password(
    state: &AppState,
    session: &Session,
    form: ChangePasswordForm,
) -> ApiResult<()> {
    let profile_service = ProfileService::new(&state.db, &state.config.security);

    profile_service
        .change_password(session.user_id, &form)
        .await?;

    Ok(Reply::new("Password changed successfully", ()))
}

/// Delete the session's own account after confirming the password
pub async fn delete_account(state: &AppState, session: Session, password: &str) -> ApiResult<()> {
    let profile_service = ProfileService::new(&state.db, &state.config.security);

    profile_service
        .delete_account(session.user_id, password)
        .await?;

    Ok(Reply::new("Account deleted", ()))
}

pub async fn get_trainer_stats(state: &AppState, session: &Session) -> ApiResult<TrainerStatsDto> {
    let profile_service = ProfileService::new(&state.db, &state.config.security);

    let stats = profile_service.get_trainer_stats(session.user_id).await?;

    Ok(Reply::new("Trainer statistics", stats))
}

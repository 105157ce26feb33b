use chrono::Utc;

use crate::{
    backend::{model::app::AppState, service::auth::AuthService, util::logging::log_user_activity},
    model::{
        api::{ApiResult, Reply},
        user::{LoginForm, RegisterForm, Session},
    },
};

/// Create an account with the `user` role
pub async fn register(state: &AppState, form: RegisterForm) -> ApiResult<Session> {
    let auth_service = AuthService::new(&state.db, &state.throttle, &state.config.security);

    let session = auth_service.register(&form).await?;

    Ok(Reply::new("User registered successfully", session))
}

/// Authenticate and open a session
///
/// Repeated failures lock the username for the configured lockout window.
pub async fn login(state: &AppState, form: LoginForm) -> ApiResult<Session> {
    let auth_service = AuthService::new(&state.db, &state.throttle, &state.config.security);

    let session = auth_service
        .login(&form.username, &form.password, Utc::now().naive_utc())
        .await?;

    Ok(Reply::new("Login successful", session))
}

pub async fn logout(session: Session) -> ApiResult<()> {
    log_user_activity(session.user_id, "logout", "Session closed");

    Ok(Reply::new("Logged out", ()))
}

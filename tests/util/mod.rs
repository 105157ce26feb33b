//! Helpers shared by the integration tests.

use pokedex::{
    backend::{config::Config, model::app::AppState, service::auth::AuthService},
    model::user::{RegisterForm, Role, Session},
};
use pokedex_test_utils::TestContext;

/// Satisfies the default password policy.
pub const TEST_PASSWORD: &str = "Abcdef1!";

/// Default configuration with a 1ms retry backoff.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.api.retry_backoff_ms = 1;

    config
}

/// Application state over the test database and mock server.
pub fn app_state(test: &TestContext) -> AppState {
    test.to_app_state::<AppState>().with_config(test_config())
}

/// Session for a fixture user, bypassing login.
pub fn session_for(user: &entity::user::Model, role: Role) -> Session {
    Session {
        user_id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        role,
    }
}

/// Register `username` with [`TEST_PASSWORD`] so that it can log in.
pub async fn register(state: &AppState, username: &str) -> Session {
    let form = RegisterForm {
        username: username.to_string(),
        email: format!("{username}@pallet.town"),
        password: TEST_PASSWORD.to_string(),
    };

    AuthService::new(&state.db, &state.throttle, &state.config.security)
        .register(&form)
        .await
        .expect("registration of a valid form should succeed")
}

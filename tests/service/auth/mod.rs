mod login;
mod register;

use pokedex::{
    backend::{
        config::Config,
        service::auth::{throttle::LoginThrottle, AuthService},
    },
    model::user::RegisterForm,
};
use pokedex_test_utils::TestContext;

fn form(username: &str, email: &str, password: &str) -> RegisterForm {
    RegisterForm {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn throttle(config: &Config) -> LoginThrottle {
    LoginThrottle::new(
        config.security.max_login_attempts,
        config.security.lockout_seconds,
    )
}

fn auth_service<'a>(
    test: &'a TestContext,
    throttle: &'a LoginThrottle,
    config: &'a Config,
) -> AuthService<'a> {
    AuthService::new(&test.db, throttle, &config.security)
}

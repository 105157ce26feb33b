//! Registration and login.

pub mod password;
pub mod throttle;

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::{
    backend::{
        config::SecurityConfig,
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        service::auth::{
            password::{hash_password, verify_password},
            throttle::LoginThrottle,
        },
        util::{
            logging::{log_security_event, log_user_activity},
            validation::{is_valid_email, is_valid_username, validate_password},
        },
    },
    model::user::{RegisterForm, Role, Session},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    throttle: &'a LoginThrottle,
    security: &'a SecurityConfig,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(
        db: &'a DatabaseConnection,
        throttle: &'a LoginThrottle,
        security: &'a SecurityConfig,
    ) -> Self {
        Self {
            db,
            throttle,
            security,
        }
    }

    /// Create an account with the `user` role
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// required fields, username format, password strength, email format,
    /// username uniqueness, email uniqueness.
    pub async fn register(&self, form: &RegisterForm) -> Result<Session, Error> {
        let username = form.username.trim();
        let email = form.email.trim();

        if username.is_empty() || email.is_empty() || form.password.is_empty() {
            return Err(AuthError::MissingFields.into());
        }
        if !is_valid_username(username) {
            return Err(AuthError::InvalidUsername.into());
        }
        validate_password(&form.password, self.security)?;
        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail.into());
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.username_exists(username).await? {
            return Err(AuthError::UsernameTaken.into());
        }
        if user_repo.email_exists(email).await? {
            return Err(AuthError::EmailTaken.into());
        }

        let Some(role) = user_repo.find_role(Role::User).await? else {
            return Err(AuthError::RoleMissing(Role::User.to_string()).into());
        };

        let password_hash = hash_password(&form.password)?;
        let user = user_repo
            .create(username, email, &password_hash, role.id)
            .await?;

        log_user_activity(user.id, "register", &format!("Registered as {}", user.username));

        Ok(Session {
            user_id: user.id,
            username: user.username,
            email: user.email,
            role: Role::User,
        })
    }

    /// Authenticate `username`, applying the login throttle
    ///
    /// A locked username is rejected before credentials are checked and the
    /// attempt is not counted. Unknown usernames and wrong passwords both
    /// count as failures; a success clears the counter.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        now: NaiveDateTime,
    ) -> Result<Session, Error> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields.into());
        }

        if let Err(remaining_secs) = self.throttle.check(username, now) {
            log_security_event(
                "login_blocked",
                None,
                Some(&format!("Username: {username} | Remaining: {remaining_secs}s")),
            );

            return Err(AuthError::AccountLocked { remaining_secs }.into());
        }

        let user_repo = UserRepository::new(self.db);

        let authenticated = match user_repo.get_by_username(username).await? {
            Some((user, role)) if verify_password(password, &user.password_hash)? => {
                Some((user, role))
            }
            _ => None,
        };

        let Some((user, role)) = authenticated else {
            return Err(self.fail_login(username, now));
        };

        let role = match role {
            Some(role) => role
                .name
                .parse::<Role>()
                .map_err(|_| AuthError::RoleMissing(role.name.clone()))?,
            None => return Err(AuthError::RoleMissing(user.role_id.to_string()).into()),
        };

        self.throttle.reset(username);
        log_user_activity(user.id, "login", "Successful login");

        Ok(Session {
            user_id: user.id,
            username: user.username,
            email: user.email,
            role,
        })
    }

    fn fail_login(&self, username: &str, now: NaiveDateTime) -> Error {
        let locked = self.throttle.record_failure(username, now);

        log_security_event(
            "failed_login",
            None,
            Some(&format!(
                "Username: {} | Attempts: {}",
                username,
                self.throttle.failed_attempts(username)
            )),
        );

        if locked {
            log_security_event(
                "account_locked",
                None,
                Some(&format!("Username: {username}")),
            );

            return AuthError::AccountLocked {
                remaining_secs: self.security.lockout_seconds,
            }
            .into();
        }

        AuthError::InvalidCredentials.into()
    }
}

use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    backend::error::InternalError,
    model::api::{ErrorDto, ErrorKind},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Username must be 4 to 20 characters: letters, numbers or underscores")]
    InvalidUsername,
    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),
    #[error("Password must contain an uppercase letter")]
    PasswordMissingUppercase,
    #[error("Password must contain a lowercase letter")]
    PasswordMissingLowercase,
    #[error("Password must contain a number")]
    PasswordMissingDigit,
    #[error("Password must contain a special character")]
    PasswordMissingSpecial,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Username is already taken")]
    UsernameTaken,
    #[error("Email is already registered")]
    EmailTaken,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Account locked, try again in {remaining_secs} seconds")]
    AccountLocked { remaining_secs: i64 },
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Current password is incorrect")]
    WrongPassword,
    #[error("User ID {0} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Role {0:?} is missing from the roles table")]
    RoleMissing(String),
}

impl From<AuthError> for ErrorDto {
    fn from(err: AuthError) -> Self {
        let kind = match err {
            AuthError::MissingFields
            | AuthError::InvalidUsername
            | AuthError::PasswordTooShort(_)
            | AuthError::PasswordMissingUppercase
            | AuthError::PasswordMissingLowercase
            | AuthError::PasswordMissingDigit
            | AuthError::PasswordMissingSpecial
            | AuthError::InvalidEmail
            | AuthError::PasswordMismatch => ErrorKind::Validation,
            AuthError::UsernameTaken | AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::WrongPassword => ErrorKind::Unauthorized,
            AuthError::AccountLocked { .. } => ErrorKind::Locked,
            AuthError::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", err);

                return ErrorDto::new(ErrorKind::NotFound, "User not found");
            }
            AuthError::RoleMissing(_) => return InternalError(err).into(),
        };

        ErrorDto::new(kind, err.to_string())
    }
}

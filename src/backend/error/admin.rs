use thiserror::Error;

use crate::{
    backend::util::logging::log_security_event,
    model::api::{ErrorDto, ErrorKind},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AdminError {
    #[error("User {0} attempted an administrative operation without the admin role")]
    Forbidden(i32),
    #[error("Invalid role {0:?}")]
    InvalidRole(String),
    #[error("You cannot remove your own administrator role")]
    SelfDemotion,
    #[error("You cannot delete your own account from the admin panel")]
    SelfDeletion,
    #[error("User {0} not found")]
    UserNotFound(i32),
}

impl From<AdminError> for ErrorDto {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::Forbidden(user_id) => {
                log_security_event(
                    "admin_access_denied",
                    Some(user_id),
                    Some(&err.to_string()),
                );

                ErrorDto::new(ErrorKind::Forbidden, "Administrator role required")
            }
            AdminError::InvalidRole(_) => ErrorDto::new(ErrorKind::Validation, err.to_string()),
            AdminError::SelfDemotion | AdminError::SelfDeletion => {
                ErrorDto::new(ErrorKind::Rejected, err.to_string())
            }
            AdminError::UserNotFound(_) => ErrorDto::new(ErrorKind::NotFound, "User not found"),
        }
    }
}

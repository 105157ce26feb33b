use thiserror::Error;

use crate::model::api::{ErrorDto, ErrorKind};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Email is already used by another account")]
    EmailTaken,
    #[error("Trainer name must be at least 3 characters long")]
    TrainerNameTooShort,
    #[error("Age must be between 8 and 100")]
    InvalidAge,
    #[error("Region must be at least 2 characters long")]
    RegionTooShort,
    #[error("A trainer name is required to create your trainer profile")]
    TrainerNameRequired,
    #[error("There is nothing to update")]
    NothingToUpdate,
    #[error("Create your trainer profile first")]
    NoTrainer,
}

impl From<ProfileError> for ErrorDto {
    fn from(err: ProfileError) -> Self {
        let kind = match err {
            ProfileError::EmailTaken => ErrorKind::Conflict,
            ProfileError::NoTrainer => ErrorKind::NotFound,
            _ => ErrorKind::Validation,
        };

        ErrorDto::new(kind, err.to_string())
    }
}

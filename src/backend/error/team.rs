use thiserror::Error;

use crate::model::api::{ErrorDto, ErrorKind};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TeamError {
    #[error("Your team is full (maximum {max} Pokémon)")]
    TeamFull { max: u64 },
    #[error("You cannot remove the last Pokémon of your team")]
    LastPokemon,
    #[error("That Pokémon is not in your team")]
    NotInTeam,
    #[error("Nickname cannot be empty")]
    EmptyNickname,
    #[error("Nickname cannot be longer than {max} characters")]
    NicknameTooLong { max: usize },
}

impl From<TeamError> for ErrorDto {
    fn from(err: TeamError) -> Self {
        let kind = match err {
            TeamError::TeamFull { .. } | TeamError::LastPokemon => ErrorKind::Rejected,
            TeamError::NotInTeam => ErrorKind::NotFound,
            TeamError::EmptyNickname | TeamError::NicknameTooLong { .. } => ErrorKind::Validation,
        };

        ErrorDto::new(kind, err.to_string())
    }
}

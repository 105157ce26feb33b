use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    backend::error::InternalError,
    model::api::{ErrorDto, ErrorKind},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PokemonError {
    #[error("Enter a name or number to search")]
    EmptyQuery,
    #[error("Pokémon {0:?} not found")]
    NotFound(String),
    #[error("Upstream record for {pokemon:?} has no {stat:?} stat")]
    MissingStat { pokemon: String, stat: String },
    #[error("Species record for {0:?} has no evolution chain")]
    MissingEvolutionChain(String),
}

impl From<PokemonError> for ErrorDto {
    fn from(err: PokemonError) -> Self {
        match err {
            PokemonError::EmptyQuery => ErrorDto::new(ErrorKind::Validation, err.to_string()),
            PokemonError::NotFound(_) => {
                tracing::debug!("{}", err);

                ErrorDto::new(ErrorKind::NotFound, err.to_string())
            }
            PokemonError::MissingStat { .. } | PokemonError::MissingEvolutionChain(_) => {
                InternalError(err).into()
            }
        }
    }
}

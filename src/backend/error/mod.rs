//! Error types for the Pokédex backend.
//!
//! Each domain has its own `thiserror` enum; [`Error`] aggregates them together
//! with infrastructure errors so services can use `?` freely. Controllers turn
//! an [`Error`] into an [`ErrorDto`] carrying an [`ErrorKind`] and a message
//! safe to show to the user.

pub mod admin;
pub mod auth;
pub mod config;
pub mod pokemon;
pub mod profile;
pub mod retry;
pub mod team;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    backend::error::{
        admin::AdminError, auth::AuthError, config::ConfigError, pokemon::PokemonError,
        profile::ProfileError, team::TeamError,
    },
    model::api::{ErrorDto, ErrorKind},
};

/// Message shown for every infrastructure failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Error performing the operation";

/// Main error type for the Pokédex backend.
///
/// Domain variants carry user-facing meaning and map to a specific
/// [`ErrorKind`]; the remaining variants are infrastructure failures that are
/// logged in full and reported with [`GENERIC_ERROR_MESSAGE`].
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file missing values or malformed.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Registration, login, password change.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Profile and trainer edits.
    #[error(transparent)]
    ProfileError(#[from] ProfileError),
    /// Team mutation rules.
    #[error(transparent)]
    TeamError(#[from] TeamError),
    /// Creature lookup and search.
    #[error(transparent)]
    PokemonError(#[from] PokemonError),
    /// Administrative operations.
    #[error(transparent)]
    AdminError(#[from] AdminError),
    /// Stored value could not be decoded.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the application.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Upstream API client error (transport, status, decoding).
    #[error(transparent)]
    PokeApiError(#[from] pokeapi::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// JSON column encode/decode error.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Password hashing backend error.
    #[error("Password hashing failed: {0}")]
    PasswordHashError(String),
    /// Log directory or subscriber could not be set up.
    #[error("Failed to initialise logging: {0}")]
    LoggingError(String),
}

impl From<Error> for ErrorDto {
    fn from(err: Error) -> Self {
        match err {
            Error::AuthError(err) => err.into(),
            Error::ProfileError(err) => err.into(),
            Error::TeamError(err) => err.into(),
            Error::PokemonError(err) => err.into(),
            Error::AdminError(err) => err.into(),
            Error::PokeApiError(pokeapi::Error::NotFound(resource)) => {
                tracing::debug!("Upstream resource not found: {}", resource);

                ErrorDto::new(ErrorKind::NotFound, "Pokémon not found")
            }
            err => InternalError(err).into(),
        }
    }
}

/// Wrapper converting any displayable error into an [`ErrorKind::Internal`] DTO.
///
/// Logs the full error and returns the generic message so no implementation
/// detail reaches the window.
pub struct InternalError<E>(pub E);

impl<E: std::fmt::Display> From<InternalError<E>> for ErrorDto {
    fn from(InternalError(err): InternalError<E>) -> Self {
        tracing::error!("{}", err);

        ErrorDto::new(ErrorKind::Internal, GENERIC_ERROR_MESSAGE)
    }
}

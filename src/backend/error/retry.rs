use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Upstream API: connect failures, timeouts and 5xx are worth another try,
            // 404 and other 4xx answers will not change
            Self::PokeApiError(err) if err.is_transient() => ErrorRetryStrategy::Retry,
            Self::PokeApiError(_) => ErrorRetryStrategy::Fail,

            Self::DbErr(db_err) => match db_err {
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,
                _ => ErrorRetryStrategy::Fail,
            },

            Self::ConfigError(_)
            | Self::AuthError(_)
            | Self::ProfileError(_)
            | Self::TeamError(_)
            | Self::PokemonError(_)
            | Self::AdminError(_)
            | Self::ParseError(_)
            | Self::InternalError(_)
            | Self::JsonError(_)
            | Self::PasswordHashError(_)
            | Self::LoggingError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

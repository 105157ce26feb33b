//! Log channels.
//!
//! Besides the console, five rotating files are written under the configured
//! directory. Each file listens to one tracing target, except `error.log`
//! which receives every `ERROR` event:
//!
//! | file | target | size | backups |
//! |---|---|---|---|
//! | `error.log` | any, `ERROR` only | 5 MiB | 5 |
//! | `user_activity.log` | `pokedex::user` | 5 MiB | 30 |
//! | `api.log` | `pokedex::api` | 2 MiB | 3 |
//! | `database.log` | `pokedex::database` | 3 MiB | 4 |
//! | `security.log` | `pokedex::security` | 1 MiB | 10 |
//!
//! Messages use the `Key: value | Key: value` layout produced by the helpers
//! below. Passwords never go through these helpers.

use std::path::Path;

use dioxus_logger::tracing::{self, Level, Subscriber};
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt,
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::backend::{config::LoggingConfig, error::Error, util::rotating_file::RotatingFile};

pub const USER_TARGET: &str = "pokedex::user";
pub const API_TARGET: &str = "pokedex::api";
pub const DATABASE_TARGET: &str = "pokedex::database";
pub const SECURITY_TARGET: &str = "pokedex::security";

const MIB: u64 = 1024 * 1024;

/// Install the global subscriber: console output filtered by `config.level`
/// plus the five file channels.
pub fn init(config: &LoggingConfig) -> Result<(), Error> {
    let dir = Path::new(&config.directory);

    let console_filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| {
        eprintln!("Invalid log level {:?}, falling back to info", config.level);
        EnvFilter::new("info")
    });

    let errors = RotatingFile::new(dir.join("error.log"), 5 * MIB, 5)
        .map_err(|e| Error::LoggingError(e.to_string()))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_filter(console_filter))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(errors)
                .with_filter(LevelFilter::ERROR),
        )
        .with(channel(dir, "user_activity.log", 5 * MIB, 30, USER_TARGET)?)
        .with(channel(dir, "api.log", 2 * MIB, 3, API_TARGET)?)
        .with(channel(dir, "database.log", 3 * MIB, 4, DATABASE_TARGET)?)
        .with(channel(dir, "security.log", MIB, 10, SECURITY_TARGET)?)
        .try_init()
        .map_err(|e| Error::LoggingError(e.to_string()))?;

    Ok(())
}

fn channel<S>(
    dir: &Path,
    file_name: &str,
    max_bytes: u64,
    backups: usize,
    target: &'static str,
) -> Result<impl Layer<S>, Error>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let file = RotatingFile::new(dir.join(file_name), max_bytes, backups)
        .map_err(|e| Error::LoggingError(format!("{file_name}: {e}")))?;

    Ok(fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(file)
        .with_filter(Targets::new().with_target(target, Level::INFO)))
}

/// `User ID: 1 | Action: login | Details: ...`
pub fn log_user_activity(user_id: i32, action: &str, details: &str) {
    tracing::info!(
        target: USER_TARGET,
        "User ID: {} | Action: {} | Details: {}",
        user_id,
        action,
        details
    );
}

/// `Endpoint: /pokemon/25 | Method: GET | Status: 200 | Time: 0.12s`
pub fn log_api_call(endpoint: &str, method: &str, status: u16, elapsed_secs: f64) {
    tracing::info!(
        target: API_TARGET,
        "Endpoint: {} | Method: {} | Status: {} | Time: {:.2}s",
        endpoint,
        method,
        status,
        elapsed_secs
    );
}

/// `Operation: INSERT | Table: users | Details: ...`
pub fn log_database_operation(operation: &str, table: &str, details: &str) {
    tracing::info!(
        target: DATABASE_TARGET,
        "Operation: {} | Table: {} | Details: {}",
        operation,
        table,
        details
    );
}

/// `Type: failed_login | User ID: 3 | Details: ...`; absent parts are omitted.
pub fn log_security_event(event_type: &str, user_id: Option<i32>, details: Option<&str>) {
    let mut message = format!("Type: {event_type}");
    if let Some(user_id) = user_id {
        message.push_str(&format!(" | User ID: {user_id}"));
    }
    if let Some(details) = details {
        message.push_str(&format!(" | Details: {details}"));
    }

    tracing::warn!(target: SECURITY_TARGET, "{}", message);
}

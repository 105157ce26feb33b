use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::backend::{config::Config, error::Error};

/// Build the PokéAPI client from the `[api]` section
pub fn build_pokeapi_client(config: &Config) -> Result<pokeapi::Client, Error> {
    let client = pokeapi::Client::builder()
        .base_url(&config.api.base_url)
        .timeout(Duration::from_secs(config.api.timeout_secs))
        .user_agent(&config.api.user_agent)
        .build()?;

    Ok(client)
}

/// Connect to the database and run migrations
///
/// The desktop app holds a single logical connection for its lifetime.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let timeout = Duration::from_secs(config.database.connect_timeout_secs);

    let mut opt = ConnectOptions::new(config.database.url());
    opt.max_connections(1)
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

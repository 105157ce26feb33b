use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::backend::{
    config::Config,
    service::{auth::throttle::LoginThrottle, sprite::SpriteService},
};

/// Everything a controller needs, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub pokeapi: pokeapi::Client,
    pub config: Arc<Config>,
    pub throttle: Arc<LoginThrottle>,
    pub sprites: SpriteService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, pokeapi: pokeapi::Client, config: Config) -> Self {
        let throttle = LoginThrottle::new(
            config.security.max_login_attempts,
            config.security.lockout_seconds,
        );
        let sprites = SpriteService::new(pokeapi.clone(), SpriteService::DEFAULT_CONCURRENCY);

        Self {
            db,
            pokeapi,
            config: Arc::new(config),
            throttle: Arc::new(throttle),
            sprites,
        }
    }

    /// Replace the configuration, rebuilding the throttle from its security section.
    pub fn with_config(self, config: Config) -> Self {
        Self::new(self.db, self.pokeapi, config)
    }
}

/// Two states are equal when they share the same configuration and throttle.
impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.config, &other.config) && Arc::ptr_eq(&self.throttle, &other.throttle)
    }
}

/// Used by the test harness, which only knows about the connection and client.
impl From<(DatabaseConnection, pokeapi::Client)> for AppState {
    fn from((db, pokeapi): (DatabaseConnection, pokeapi::Client)) -> Self {
        Self::new(db, pokeapi, Config::default())
    }
}

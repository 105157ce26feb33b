//! TOML configuration.
//!
//! Every section has defaults, so an empty or missing file yields a working
//! configuration. `DATABASE_URL` in the environment (or a `.env` file)
//! overrides the configured database.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::backend::error::config::ConfigError;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "POKEDEX_CONFIG";
/// Configuration file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
/// Languages the description lookup supports.
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["es", "en"];

/// Complete application configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `[database]`
    pub database: DatabaseConfig,
    /// `[api]`
    pub api: ApiConfig,
    /// `[app]`
    pub app: AppConfig,
    /// `[logging]`
    pub logging: LoggingConfig,
    /// `[security]`
    pub security: SecurityConfig,
}

/// Database connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Full connection URL; takes precedence over the individual fields.
    pub url: Option<String>,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Login user
    pub user: String,
    /// Login password
    pub password: String,
    /// Schema name
    pub name: String,
    /// Connect and acquire timeout
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            name: "pokedex_db".to_string(),
            connect_timeout_secs: 10,
        }
    }
}

impl DatabaseConfig {
    /// Connection URL, built from the individual fields when `url` is unset.
    pub fn url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "mysql://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            ),
        }
    }
}

/// Upstream creature API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Extra attempts after a transient failure, 0 disables retrying
    pub max_retries: u32,
    /// Wait before the first retry, doubled for each further one
    pub retry_backoff_ms: u64,
    /// Sent with every request
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: pokeapi::DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            max_retries: 3,
            retry_backoff_ms: 1000,
            user_agent: concat!("pokedex/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Display and behaviour settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window title
    pub title: String,
    /// `light` or `dark`
    pub theme: String,
    /// Language of Pokémon descriptions
    pub language: String,
    /// Maximum team entries per trainer
    pub max_team_size: u64,
    /// Number of results a search returns
    pub search_limit: usize,
    /// Enables debug console output
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Pokédex".to_string(),
            theme: "light".to_string(),
            language: "es".to_string(),
            max_team_size: 10,
            search_limit: 10,
            debug: false,
        }
    }
}

/// Log output settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Console filter directive, e.g. `info` or `pokedex=debug`
    pub level: String,
    /// Directory holding the rotating log files
    pub directory: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: "logs".to_string(),
        }
    }
}

/// Password policy and login throttling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Minimum password length
    pub min_password_length: usize,
    /// Passwords must contain one of `!@#$%^&*(),.?":{}|<>`
    pub require_special_char: bool,
    /// Failed logins before the account locks
    pub max_login_attempts: u32,
    /// Lockout duration
    pub lockout_seconds: i64,
    /// Idle time after which the desktop session is closed
    pub session_timeout_secs: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            min_password_length: 8,
            require_special_char: true,
            max_login_attempts: 3,
            lockout_seconds: 300,
            session_timeout_secs: 3600,
        }
    }
}

impl Config {
    /// Load `.env`, read the file named by `POKEDEX_CONFIG` (or `config.toml`)
    /// and apply the `DATABASE_URL` override.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if Path::new(&path).exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database.url = Some(url);
        }

        config.validate()?;

        Ok(config)
    }

    /// Parse a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values the rest of the application cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_LANGUAGES.contains(&self.app.language.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "app.language".to_string(),
                reason: format!(
                    "{:?} is not one of {:?}",
                    self.app.language, SUPPORTED_LANGUAGES
                ),
            });
        }

        if self.app.max_team_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "app.max_team_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        if self.security.max_login_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                key: "security.max_login_attempts".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

//! Application settings and configuration structures.

use std::str::FromStr;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port, timeouts)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,

    /// How long in-flight requests may drain after a shutdown signal, in seconds
    pub shutdown_timeout_secs: u64,
}

/// PostgreSQL database configuration.
///
/// `url` wins when set; otherwise the connection is assembled from the
/// individual fields.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,

    /// Apply pending migrations on startup
    pub run_migrations: bool,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 4. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let vars: Map<String, String> = std::env::vars().collect();
        let environment = env_value(&vars, "RUN_ENV").unwrap_or_else(|| "development".into());

        Self::builder(&environment, &vars)?.build()?.try_deserialize()
    }

    /// Layer defaults, config files and the given environment variables.
    ///
    /// Empty variables count as unset.
    fn builder(
        environment: &str,
        vars: &Map<String, String>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("environment", environment)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.shutdown_timeout_secs", 10)?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432)?
            .set_default("database.name", "chats_db")?
            .set_default("database.user", "postgres")?
            .set_default("database.password", "postgres")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("database.run_migrations", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .ignore_empty(true)
                    .source(Some(vars.clone())),
            )
            // Plain variables used by container deployments
            .set_override_option("server.host", env_value(vars, "SERVER_HOST"))?
            .set_override_option("server.port", env_value(vars, "PORT"))?
            .set_override_option("database.url", env_value(vars, "DATABASE_URL"))?
            .set_override_option("database.host", env_value(vars, "DB_HOST"))?
            .set_override_option("database.port", env_value(vars, "DB_PORT"))?
            .set_override_option("database.name", env_value(vars, "DB_NAME"))?
            .set_override_option("database.user", env_value(vars, "DB_USER"))?
            .set_override_option("database.password", env_value(vars, "DB_PASSWORD"))
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerSettings {
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

fn env_value(vars: &Map<String, String>, key: &str) -> Option<String> {
    vars.get(key).filter(|v| !v.is_empty()).cloned()
}

impl DatabaseSettings {
    /// Build connection options from the URL or the individual fields.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match self.url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => PgConnectOptions::from_str(url),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .database(&self.name)
                .username(&self.user)
                .password(&self.password)),
        }
    }
}

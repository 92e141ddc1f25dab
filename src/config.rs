//! Process configuration, read once at startup and passed down explicitly.

use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub project_name: String,
    pub bind_addr: String,
    pub database_url: String,
    pub max_connections: u32,
}

impl AppConfig {
    /// Read configuration from the environment. Missing variables fall back
    /// to development defaults; unparsable values are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_connections = match std::env::var("MAX_DB_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("MAX_DB_CONNECTIONS"))?,
            Err(_) => 5,
        };
        Ok(AppConfig {
            project_name: env_or("PROJECT_NAME", "Widget Backend"),
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:8000"),
            database_url: env_or("DATABASE_URL", "postgres://localhost/widgets"),
            max_connections,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

//! Environment-driven runtime configuration.

use crate::error::ConfigError;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Runtime configuration for the storefront data layer.
pub struct Config {
    /// Connection string for the relational store.
    pub database_url: String,
    /// Maximum number of pooled database connections.
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` is required. `DATABASE_MAX_CONNECTIONS` is optional and
    /// defaults to 10.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: "DATABASE_MAX_CONNECTIONS".to_string(),
                reason: format!("expected a positive integer, got {:?}", value),
            })?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}

//! Error types for the storefront data layer.
//!
//! Repository methods return [`sea_orm::DbErr`] directly; the types here exist for
//! the surrounding infrastructure (configuration loading, startup). There is no
//! custom taxonomy on top of the database error: connectivity failures, missing
//! tables, and malformed queries all surface as whatever the store reports.

use thiserror::Error;

/// Configuration error (missing or invalid environment variables).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable was not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable was set to a value that could not be parsed.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Main error type for the storefront data layer.
///
/// Aggregates configuration and database errors into a single type via
/// `thiserror`'s `#[from]`, enabling `?` conversion from the underlying errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

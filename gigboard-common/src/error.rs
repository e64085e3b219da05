//! Common error types for Gigboard

use thiserror::Error;

/// Common result type for Gigboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy shared by the storage and web layers
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite query or connection failure from the listing store
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem failure opening the database or a log file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bad serve arguments or an unreadable TOML config
    #[error("Configuration error: {0}")]
    Config(String),

    /// No venue, artist, or show record with the requested id
    #[error("Not found: {0}")]
    NotFound(String),

    /// Form submission or request parameter failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected failure not covered by the other variants
    #[error("Internal error: {0}")]
    Internal(String),
}

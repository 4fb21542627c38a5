use thiserror::Error;

/// Startup and serving failures
///
/// Request-level failures use [`crate::utils::AppError`] instead.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sqlx::Error> for ServerError {
    fn from(err: sqlx::Error) -> Self {
        ServerError::Database(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for ServerError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        ServerError::Database(format!("Failed to apply migrations: {err}"))
    }
}

/// Result alias for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;

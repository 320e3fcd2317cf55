use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration not found: {0}")]
    ConfigNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(u64),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

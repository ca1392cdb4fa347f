use thiserror::Error;

/// Errors for db stuff.
#[derive(Debug, Error)]
pub enum DbError {
    /// The query matched no row, or the statement affected none.
    #[error("no rows in result set")]
    NoRows,

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Database configuration error: {0}")]
    Configuration(String),
}

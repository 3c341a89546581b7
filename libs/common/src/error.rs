//! Database error taxonomy shared by the catalog services

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Errors surfaced by the database layer
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a connection or build the pool
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// A query failed to execute
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// Schema bootstrap failed
    #[error("Database migration error: {0}")]
    Migration(#[source] SqlxError),

    /// The configuration could not be interpreted
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;

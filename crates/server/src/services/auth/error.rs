//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong password or unknown username. Callers must not be able to tell
    /// which.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The stored hash for an existing user cannot be parsed or was produced
    /// by an unsupported scheme.
    #[error("stored password hash is malformed")]
    MalformedHash,

    /// Password does not meet the creation requirements.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// The blocking hash task panicked or was cancelled.
    #[error("password task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

//! CLI subcommands.

pub mod migrate;
pub mod user;

use pemplat_server::config::ConfigError;
use pemplat_server::db::RepositoryError;
use pemplat_server::services::auth::AuthError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Could not read password: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("{0}")]
    Repository(#[from] RepositoryError),
}

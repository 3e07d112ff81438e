//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! pemplat migrate
//! ```
//!
//! # Environment Variables
//!
//! - `PEMPLAT_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string
//!
//! Migration files live in `crates/server/migrations/` and are embedded in the
//! server crate at build time.

use pemplat_server::config::ServerConfig;
use pemplat_server::db;

use super::CliError;

/// Apply all pending migrations.
///
/// # Errors
///
/// Returns an error if configuration is missing, the database is
/// unreachable, or a migration fails.
pub async fn run() -> Result<(), CliError> {
    let config = ServerConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url, 1).await?;

    tracing::info!("Running migrations...");
    db::run_migrations(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}

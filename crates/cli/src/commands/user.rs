//! User management commands.
//!
//! # Usage
//!
//! ```bash
//! PEMPLAT_NEW_USER_PASSWORD='correct horse battery' \
//!     pemplat user create -u alice -e alice@example.com
//! ```
//!
//! # Environment Variables
//!
//! - `PEMPLAT_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string
//! - `PEMPLAT_NEW_USER_PASSWORD` - Password for the new user. Read from the
//!   first line of stdin when unset.

use pemplat_core::{Email, UserId, Username};
use pemplat_server::config::ServerConfig;
use pemplat_server::db::{self, UserRepository};
use pemplat_server::models::NewUser;
use pemplat_server::services::auth::hash_new_password;
use secrecy::{ExposeSecret, SecretString};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::CliError;

const PASSWORD_ENV_VAR: &str = "PEMPLAT_NEW_USER_PASSWORD";

/// Create a new user.
///
/// The password is hashed with the same Argon2id scheme the HTTP API uses,
/// so the account can log in through `POST /login` right away.
///
/// # Errors
///
/// Returns an error if the username, email or password is invalid, the
/// username is taken, or the database is unreachable.
pub async fn create(username: &str, email: &str) -> Result<UserId, CliError> {
    let username = Username::parse(username)
        .map_err(|e| CliError::InvalidInput(format!("username: {e}")))?;
    let email =
        Email::parse(email).map_err(|e| CliError::InvalidInput(format!("email: {e}")))?;

    let config = ServerConfig::from_env()?;
    let password = read_password().await?;
    let password_hash = hash_new_password(password.expose_secret().to_owned()).await?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url, 1).await?;

    tracing::info!("Creating user: {} ({})", username, email);
    let user_id = UserRepository::new(&pool)
        .create(&NewUser {
            username,
            email,
            password_hash,
        })
        .await?;

    tracing::info!("User created successfully! ID: {}", user_id);
    Ok(user_id)
}

/// Read the new password from the environment, falling back to stdin.
async fn read_password() -> Result<SecretString, CliError> {
    if let Ok(password) = std::env::var(PASSWORD_ENV_VAR) {
        return Ok(SecretString::from(password));
    }

    tracing::info!("{PASSWORD_ENV_VAR} not set, reading password from stdin");
    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;

    let password = line.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        return Err(CliError::InvalidInput("password must not be empty".to_owned()));
    }

    Ok(SecretString::from(password.to_owned()))
}

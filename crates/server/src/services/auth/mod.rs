//! Authentication service.
//!
//! Provides password hashing at account creation and the login check. The
//! credential lookup goes through [`CredentialStore`] so the login path can
//! run against something other than `PostgreSQL`.

mod error;
pub mod password;

use std::future::Future;

pub use error::AuthError;
pub use password::PasswordCheck;

use pemplat_core::Username;

use crate::db::RepositoryError;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length.
const MAX_PASSWORD_LENGTH: usize = 128;

/// Read-only access to `{username, password hash}` pairs.
pub trait CredentialStore: Sync {
    /// Fetch the stored hash for `username`, or `None` if there is no such user.
    fn password_hash(
        &self,
        username: &Username,
    ) -> impl Future<Output = Result<Option<String>, RepositoryError>> + Send;
}

/// Authentication service.
///
/// Handles the login check against whatever credential store it was built with.
pub struct AuthService<S> {
    store: S,
}

impl<S: CredentialStore> AuthService<S> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Check a username/password pair.
    ///
    /// Unknown usernames still pay for one Argon2 verification, so response
    /// time does not reveal whether an account exists.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown username or a
    /// wrong password.
    /// Returns `AuthError::MalformedHash` if the stored hash is unusable.
    /// Returns `AuthError::Repository` if the lookup fails.
    pub async fn login(&self, username: &str, password: &str) -> Result<Username, AuthError> {
        let candidate = password.to_owned();

        let stored = match Username::parse(username) {
            Ok(username) => self
                .store
                .password_hash(&username)
                .await?
                .map(|hash| (username, hash)),
            Err(_) => None,
        };

        let Some((username, stored_hash)) = stored else {
            tokio::task::spawn_blocking(move || password::verify_dummy(&candidate)).await?;
            return Err(AuthError::InvalidCredentials);
        };

        let check =
            tokio::task::spawn_blocking(move || password::verify(&stored_hash, &candidate))
                .await?;

        match check {
            PasswordCheck::Match => {
                tracing::info!(%username, "login succeeded");
                Ok(username)
            }
            PasswordCheck::Mismatch => {
                tracing::info!(%username, "login rejected: wrong password");
                Err(AuthError::InvalidCredentials)
            }
            PasswordCheck::Malformed => {
                tracing::error!(%username, "stored password hash is malformed");
                Err(AuthError::MalformedHash)
            }
        }
    }
}

/// Validate and hash a new account password.
///
/// Hashing runs on the blocking pool.
///
/// # Errors
///
/// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
/// Returns `AuthError::PasswordHash` if hashing fails.
pub async fn hash_new_password(password: String) -> Result<String, AuthError> {
    validate_password(&password)?;

    tokio::task::spawn_blocking(move || password::hash_password(&password))
        .await?
        .map_err(|_| AuthError::PasswordHash)
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    let length = password.chars().count();

    if length < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    if length > MAX_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at most {MAX_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

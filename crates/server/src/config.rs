//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PEMPLAT_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `PEMPLAT_HOST` - Bind address (default: 127.0.0.1)
//! - `PEMPLAT_PORT` - Listen port (default: 8083)
//! - `PEMPLAT_DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Trace sample rate, 0.0-1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "8083";
const DEFAULT_MAX_CONNECTIONS: &str = "10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Maximum number of pooled database connections
    pub db_max_connections: u32,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of requests traced in Sentry
    pub sentry_traces_sample_rate: f32,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = get("PEMPLAT_DATABASE_URL")
            .or_else(|| get("DATABASE_URL"))
            .map(SecretString::from)
            .ok_or_else(|| ConfigError::MissingEnvVar("PEMPLAT_DATABASE_URL".to_string()))?;
        validate_database_url(&database_url, "PEMPLAT_DATABASE_URL")?;

        let host = parse_var::<IpAddr>(&get, "PEMPLAT_HOST", DEFAULT_HOST)?;
        let port = parse_var::<u16>(&get, "PEMPLAT_PORT", DEFAULT_PORT)?;
        let db_max_connections =
            parse_var::<u32>(&get, "PEMPLAT_DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if db_max_connections == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "PEMPLAT_DB_MAX_CONNECTIONS".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let sentry_sample_rate = parse_rate(&get, "SENTRY_SAMPLE_RATE", "1.0")?;
        let sentry_traces_sample_rate = parse_rate(&get, "SENTRY_TRACES_SAMPLE_RATE", "0.0")?;

        Ok(Self {
            database_url,
            host,
            port,
            db_max_connections,
            sentry_dsn: get("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: get("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable, falling back to `default` when unset.
fn parse_var<T>(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get(key)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a sampling rate and clamp it to `0.0..=1.0`.
fn parse_rate(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<f32, ConfigError> {
    let rate = parse_var::<f32>(get, key, default)?;
    if rate.is_nan() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be a number".to_string(),
        ));
    }
    Ok(rate.clamp(0.0, 1.0))
}

/// Reject anything that is not a `PostgreSQL` URL before the pool tries it.
fn validate_database_url(url: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = url.expose_secret();
    if value.starts_with("postgres://") || value.starts_with("postgresql://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must start with postgres:// or postgresql://".to_string(),
        ))
    }
}

//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use pemplat_core::{Email, UserId, Username};

/// A registered user as returned to API callers.
///
/// The password hash is deliberately not part of this type; it only leaves
/// the store through the credential lookup.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user ID.
    #[serde(rename = "user_id")]
    pub id: UserId,
    /// Unique login name.
    pub username: Username,
    /// Contact address.
    pub email: Email,
    /// When the account was created.
    pub registration_date: DateTime<Utc>,
}

/// Input for creating a user. The password has already been hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub password_hash: String,
}

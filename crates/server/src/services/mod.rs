//! Business logic services for the server.
//!
//! # Services
//!
//! - `auth` - Password hashing, verification and the login check
pub mod auth;

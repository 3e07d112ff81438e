//! Pemplat Core - Shared types library.
//!
//! This crate provides the validated types used across all Pemplat components:
//! - `server` - JSON API and page rendering
//! - `cli` - Command-line tools for migrations and user management
//!
//! # Architecture
//!
//! The core crate contains only types and their validation rules - no I/O,
//! no database access, no HTTP. Values that made it into one of these types
//! have already been checked, so downstream code never re-validates.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, usernames, emails, product names, prices and stock counts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

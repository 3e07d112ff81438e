//! Domain models for the server.
//!
//! These are validated domain objects, separate from the row types the
//! repositories decode and from the request bodies the routes accept.

pub mod product;
pub mod user;

pub use product::{NewProduct, Product};
pub use user::{NewUser, User};

//! Core types for Pemplat.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod price;
pub mod product_name;
pub mod stock;
pub mod username;

pub use email::{Email, EmailError};
pub use id::*;
pub use price::{Price, PriceError};
pub use product_name::{ProductName, ProductNameError};
pub use stock::{StockError, StockQuantity};
pub use username::{Username, UsernameError};

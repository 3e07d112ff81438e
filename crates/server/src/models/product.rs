//! Product domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use pemplat_core::{Price, ProductId, ProductName, StockQuantity};

/// A catalogue product.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Unique product ID.
    #[serde(rename = "product_id")]
    pub id: ProductId,
    /// Display name.
    #[serde(rename = "product_name")]
    pub name: ProductName,
    /// Free-form description, possibly empty.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Units on hand.
    pub stock_quantity: StockQuantity,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

/// Input for creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub description: String,
    pub price: Price,
    pub stock_quantity: StockQuantity,
}

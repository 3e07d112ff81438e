//! Product repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use pemplat_core::{Price, ProductId, ProductName, StockQuantity};

use super::RepositoryError;
use crate::models::product::{NewProduct, Product};

const PRODUCT_COLUMNS: &str =
    "product_id, product_name, description, price, stock_quantity, created_at";

/// Internal row type for `PostgreSQL` product queries.
///
/// `price` and `stock_quantity` decode straight into their validated types;
/// the `CHECK` constraints on the table keep them in range.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    product_id: i64,
    product_name: String,
    description: String,
    price: Price,
    stock_quantity: StockQuantity,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let name = ProductName::parse(&row.product_name).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid product name in database: {e}"))
        })?;

        Ok(Self {
            id: ProductId::new(row.product_id),
            name,
            description: row.description,
            price: row.price,
            stock_quantity: row.stock_quantity,
            created_at: row.created_at,
        })
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a product and return its new ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, product: &NewProduct) -> Result<ProductId, RepositoryError> {
        let id = sqlx::query_scalar::<_, ProductId>(
            r"
            INSERT INTO products (product_name, description, price, stock_quantity)
            VALUES ($1, $2, $3, $4)
            RETURNING product_id
            ",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock_quantity)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored row is invalid.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// List all products, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if any stored row is invalid.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY product_id"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Rename a product.
    ///
    /// Returns `None` if no product has the given ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update_name(
        &self,
        id: ProductId,
        name: &ProductName,
    ) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "UPDATE products SET product_name = $1 WHERE product_id = $2 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(name)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Delete a product.
    ///
    /// # Returns
    ///
    /// Returns `true` if the product was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

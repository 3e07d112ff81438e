//! Product CRUD route handlers.

use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pemplat_core::{Price, ProductId, ProductName, StockQuantity};

use super::extract::{ApiJson, IdPath};
use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::{NewProduct, Product};
use crate::state::AppState;

// =============================================================================
// Request Types
// =============================================================================

/// Body of `POST /products`.
///
/// `price` may be sent as a JSON number (`9.99`) or a decimal string
/// (`"9.99"`).
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: i64,
}

/// Body of `PUT /products/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub product_name: String,
}

/// Body of a successful `POST /products`.
#[derive(Debug, Serialize)]
pub struct ProductCreated {
    pub product_id: ProductId,
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = AppError;

    fn try_from(req: CreateProductRequest) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            name: ProductName::parse(&req.product_name)
                .map_err(|e| AppError::BadRequest(e.to_string()))?,
            description: req.description,
            price: Price::new(req.price).map_err(|e| AppError::BadRequest(e.to_string()))?,
            stock_quantity: StockQuantity::new(req.stock_quantity)
                .map_err(|e| AppError::BadRequest(e.to_string()))?,
        })
    }
}

impl TryFrom<UpdateProductRequest> for ProductName {
    type Error = AppError;

    fn try_from(req: UpdateProductRequest) -> std::result::Result<Self, Self::Error> {
        Self::parse(&req.product_name).map_err(|e| AppError::BadRequest(e.to_string()))
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List all products.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list_all().await?;
    Ok(Json(products))
}

/// Get a single product.
pub async fn show(
    State(state): State<AppState>,
    IdPath(id): IdPath<ProductId>,
) -> Result<Json<Product>> {
    ProductRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Create a product.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductCreated>)> {
    let product = NewProduct::try_from(body)?;
    let product_id = ProductRepository::new(state.pool()).create(&product).await?;

    tracing::info!(%product_id, "product created");
    Ok((StatusCode::CREATED, Json(ProductCreated { product_id })))
}

/// Rename a product.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<ProductId>,
    ApiJson(body): ApiJson<UpdateProductRequest>,
) -> Result<Json<Product>> {
    let name = ProductName::try_from(body)?;

    ProductRepository::new(state.pool())
        .update_name(id, &name)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Delete a product.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<ProductId>,
) -> Result<StatusCode> {
    if ProductRepository::new(state.pool()).delete(id).await? {
        tracing::info!(product_id = %id, "product deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("product {id}")))
    }
}

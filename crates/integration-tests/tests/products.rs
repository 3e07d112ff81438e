//! Integration tests for product CRUD.
//!
//! Requires a `PostgreSQL` database at `TEST_DATABASE_URL`.
//! Run with: cargo test -p pemplat-integration-tests -- --ignored

use pemplat_integration_tests::TestContext;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn create_product(ctx: &TestContext, body: &Value) -> i64 {
    let resp = ctx.post_json("/products", body).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Invalid JSON");
    body["product_id"].as_i64().expect("product_id missing")
}

#[tokio::test]
#[ignore = "Requires PostgreSQL at TEST_DATABASE_URL"]
async fn test_create_then_fetch_product() {
    let ctx = TestContext::new().await;
    let id = create_product(
        &ctx,
        &json!({"product_name": "Widget", "price": 9.99, "stock_quantity": 10}),
    )
    .await;

    let resp = ctx.get(&format!("/products/{id}")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let product: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(product["product_id"], id);
    assert_eq!(product["product_name"], "Widget");
    assert_eq!(product["description"], "");
    assert_eq!(product["price"], 9.99);
    assert_eq!(product["stock_quantity"], 10);
    assert!(product["created_at"].is_string());
}

#[tokio::test]
#[ignore = "Requires PostgreSQL at TEST_DATABASE_URL"]
async fn test_price_as_string() {
    let ctx = TestContext::new().await;
    let id = create_product(
        &ctx,
        &json!({
            "product_name": "Gadget",
            "description": "Shiny",
            "price": "1250.50",
            "stock_quantity": 0,
        }),
    )
    .await;

    let product: Value = ctx
        .get(&format!("/products/{id}"))
        .await
        .json()
        .await
        .expect("Invalid JSON");
    assert_eq!(product["price"], 1250.5);
    assert_eq!(product["description"], "Shiny");
    assert_eq!(product["stock_quantity"], 0);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL at TEST_DATABASE_URL"]
async fn test_product_lifecycle() {
    let ctx = TestContext::new().await;
    let id = create_product(
        &ctx,
        &json!({"product_name": "Sprocket", "price": 3, "stock_quantity": 7}),
    )
    .await;

    let resp = ctx.get("/products").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Value> = resp.json().await.expect("Invalid JSON");
    assert!(products.iter().any(|p| p["product_id"] == id));

    let resp = ctx
        .put_json(
            &format!("/products/{id}"),
            &json!({"product_name": "Sprocket Mk II"}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let product: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(product["product_name"], "Sprocket Mk II");
    assert_eq!(product["stock_quantity"], 7);

    let resp = ctx.delete(&format!("/products/{id}")).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ctx.get(&format!("/products/{id}")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL at TEST_DATABASE_URL"]
async fn test_delete_missing_product_is_not_found() {
    let ctx = TestContext::new().await;
    let id = TestContext::missing_id();

    let resp = ctx.delete(&format!("/products/{id}")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL at TEST_DATABASE_URL"]
async fn test_invalid_products_are_rejected() {
    let ctx = TestContext::new().await;

    for body in [
        json!({"product_name": "Widget", "price": -0.01, "stock_quantity": 1}),
        json!({"product_name": "Widget", "price": 1.001, "stock_quantity": 1}),
        json!({"product_name": "Widget", "price": 1, "stock_quantity": -1}),
        json!({"product_name": "", "price": 1, "stock_quantity": 1}),
        json!({"price": 1, "stock_quantity": 1}),
    ] {
        let resp = ctx.post_json("/products", &body).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{body}");
    }
}

//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! # Auth
//! GET    /login            - Login page (HTML)
//! POST   /login            - Check username/password
//! GET    /home             - Home page (HTML)
//!
//! # Users
//! GET    /users            - List users
//! POST   /users            - Create user
//! GET    /users/{id}       - Get user
//! PUT    /users/{id}       - Rename user
//! DELETE /users/{id}       - Delete user
//!
//! # Products
//! GET    /products         - List products
//! POST   /products         - Create product
//! GET    /products/{id}    - Get product
//! PUT    /products/{id}    - Rename product
//! DELETE /products/{id}    - Delete product
//! ```
//!
//! `/health` and `/health/ready` are mounted by [`crate::app`].

pub mod auth;
pub mod extract;
pub mod pages;
pub mod products;
pub mod users;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the auth and page routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(pages::login_page).post(auth::login))
        .route("/home", get(pages::home_page))
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/{id}",
            get(users::show).put(users::update).delete(users::delete),
        )
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::delete),
        )
}

/// Build the complete router for the application.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(product_routes())
}

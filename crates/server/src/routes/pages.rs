//! Static HTML pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate;

/// Display the login page.
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate
}

/// Display the home page.
pub async fn home_page() -> impl IntoResponse {
    HomeTemplate
}

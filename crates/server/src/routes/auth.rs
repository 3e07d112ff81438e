//! Login route handler.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use super::extract::ApiJson;
use crate::db::UserRepository;
use crate::error::Result;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Check a username/password pair.
///
/// A rejected login is an `AuthError::InvalidCredentials`, rendered by
/// `AppError` as a 401 with the same body whether the user exists or not.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let service = AuthService::new(UserRepository::new(state.pool()));
    service.login(&body.username, &body.password).await?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful",
    }))
}

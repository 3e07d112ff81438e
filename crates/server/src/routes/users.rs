//! User CRUD route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use pemplat_core::{Email, UserId, Username};

use super::extract::{ApiJson, IdPath};
use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::models::{NewUser, User};
use crate::services::auth::hash_new_password;
use crate::state::AppState;

// =============================================================================
// Request Types
// =============================================================================

/// Body of `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `PUT /users/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: String,
}

/// Body of a successful `POST /users`.
#[derive(Debug, Serialize)]
pub struct UserCreated {
    pub user_id: UserId,
}

/// A create request whose fields have passed validation.
///
/// The password is still plaintext here; it is hashed off the async
/// workers just before the insert.
struct ValidatedUser {
    username: Username,
    email: Email,
    password: String,
}

impl TryFrom<CreateUserRequest> for ValidatedUser {
    type Error = AppError;

    fn try_from(req: CreateUserRequest) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            username: Username::parse(&req.username)
                .map_err(|e| AppError::BadRequest(e.to_string()))?,
            email: Email::parse(&req.email).map_err(|e| AppError::BadRequest(e.to_string()))?,
            password: req.password,
        })
    }
}

impl TryFrom<UpdateUserRequest> for Username {
    type Error = AppError;

    fn try_from(req: UpdateUserRequest) -> std::result::Result<Self, Self::Error> {
        Self::parse(&req.username).map_err(|e| AppError::BadRequest(e.to_string()))
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List all users.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = UserRepository::new(state.pool()).list_all().await?;
    Ok(Json(users))
}

/// Get a single user.
pub async fn show(
    State(state): State<AppState>,
    IdPath(id): IdPath<UserId>,
) -> Result<Json<User>> {
    UserRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))
}

/// Create a user from a username, email and plaintext password.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserCreated>)> {
    let input = ValidatedUser::try_from(body)?;
    let password_hash = hash_new_password(input.password).await?;

    let user_id = UserRepository::new(state.pool())
        .create(&NewUser {
            username: input.username,
            email: input.email,
            password_hash,
        })
        .await?;

    tracing::info!(%user_id, "user created");
    Ok((StatusCode::CREATED, Json(UserCreated { user_id })))
}

/// Rename a user.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<UserId>,
    ApiJson(body): ApiJson<UpdateUserRequest>,
) -> Result<Json<User>> {
    let username = Username::try_from(body)?;

    UserRepository::new(state.pool())
        .update_username(id, &username)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))
}

/// Delete a user.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<UserId>,
) -> Result<StatusCode> {
    if UserRepository::new(state.pool()).delete(id).await? {
        tracing::info!(user_id = %id, "user deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("user {id}")))
    }
}

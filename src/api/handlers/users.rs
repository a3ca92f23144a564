//! Handlers for user registration and deletion.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::user::{CreateUserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// { "email": "jinseong@example.com", "name": "Jinseong", "password": "password123" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the email is already registered.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let user = state.user_service.create_user(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Soft-deletes a user.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
///
/// The user's links and likes are kept. A deleted user can no longer act
/// through `X-User-Id`.
///
/// # Errors
///
/// Returns 404 Not Found if the user doesn't exist or is already deleted.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.delete_user(id).await?;

    Ok(Json(user.into()))
}

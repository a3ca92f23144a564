//! Handlers for link endpoints (list, create, get, update, delete, like).

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::link::{LinkRequest, LinkResponse};
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_user::extract_user_id_from_headers;

/// Resolves the active user named by the `X-User-Id` header.
async fn acting_user(state: &AppState, headers: &HeaderMap) -> Result<User, AppError> {
    let user_id = extract_user_id_from_headers(headers)?;
    state.user_service.get_user(user_id).await
}

/// Lists every link.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Creates a link owned by the acting user.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Spring Boot Docs",
///   "url": "https://docs.spring.io/spring-boot/",
///   "description": "Official documentation",   // optional
///   "category": "Spring",
///   "type": "Document",
///   "tags": ["java", "spring"]
/// }
/// ```
///
/// Unknown categories, types and tags are created.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or `X-User-Id` is missing.
/// Returns 404 Not Found if the acting user does not exist or was deleted.
pub async fn create_link_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let owner = acting_user(&state, &headers).await?;
    let link = state
        .link_service
        .create_link(payload.into(), &owner)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Returns one link.
///
/// # Endpoint
///
/// `GET /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn get_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(id).await?;

    Ok(Json(link.into()))
}

/// Replaces every editable field of a link.
///
/// # Endpoint
///
/// `PUT /api/links/{id}` or `PATCH /api/links/{id}`
///
/// # Request Body
///
/// Same shape as create. The tag list replaces the stored tags; the creator
/// and creation time are kept.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
/// Returns 400 Bad Request if validation fails.
pub async fn update_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<LinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state.link_service.update_link(id, payload.into()).await?;

    Ok(Json(link.into()))
}

/// Deletes a link and returns what was deleted.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// # Behavior
///
/// The link's tag associations and likes are removed with it. Categories,
/// types and tags stay.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn delete_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.delete_link(id).await?;

    Ok(Json(link.into()))
}

/// Records that the acting user likes a link.
///
/// # Endpoint
///
/// `POST /api/links/{id}/likes`
///
/// Repeating the request is harmless: a user likes a link at most once.
///
/// # Errors
///
/// Returns 400 Bad Request if `X-User-Id` is missing or malformed.
/// Returns 404 Not Found if the link or the acting user doesn't exist.
pub async fn like_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let user = acting_user(&state, &headers).await?;
    state.link_service.add_like(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

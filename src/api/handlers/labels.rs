//! Handler for listing categories, types and tags.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::label::LabelResponse;
use crate::domain::entities::LabelKind;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every label of one kind, ordered by title.
///
/// # Endpoint
///
/// `GET /api/labels/{kind}` where `kind` is `categories`, `types` or `tags`
///
/// # Errors
///
/// Returns 404 Not Found for any other kind.
pub async fn list_labels_handler(
    Path(kind): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<LabelResponse>>, AppError> {
    let kind: LabelKind = kind
        .parse()
        .map_err(|msg: String| AppError::not_found(msg, json!({ "kind": kind })))?;

    let labels = state.link_service.labels(kind).list().await?;

    Ok(Json(labels.into_iter().map(LabelResponse::from).collect()))
}

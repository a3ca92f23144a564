//! Link edit page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::views::{LinkView, NotFoundTemplate};
use crate::error::AppError;
use crate::state::AppState;

/// Template for the edit form.
///
/// Renders `templates/update_link.html`. The form is submitted by script
/// to `PATCH /api/links/{id}`.
#[derive(Template, WebTemplate)]
#[template(path = "update_link.html")]
pub struct UpdateLinkTemplate {
    pub link: LinkView,
}

/// Renders the edit form pre-filled with the stored link.
///
/// # Endpoint
///
/// `GET /update-link/{id}`
///
/// Unknown ids render the 404 page.
pub async fn update_link_page_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.link_service.get_link(id).await {
        Ok(link) => Ok(UpdateLinkTemplate { link: link.into() }.into_response()),
        Err(AppError::NotFound { message, .. }) => {
            Ok((StatusCode::NOT_FOUND, NotFoundTemplate { message }).into_response())
        }
        Err(e) => Err(e),
    }
}

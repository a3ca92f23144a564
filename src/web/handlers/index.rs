//! Link list page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use super::views::LinkView;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the home page.
///
/// Renders `templates/index.html` with one row per link.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub links: Vec<LinkView>,
}

/// Renders every link.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> Result<IndexTemplate, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(IndexTemplate {
        links: links.into_iter().map(LinkView::from).collect(),
    })
}

//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, update_link_page_handler};
use axum::{Router, routing::get};

/// HTML page routes.
///
/// # Endpoints
///
/// - `GET /` - Link list
/// - `GET /update-link/{id}` - Edit form for one link
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/update-link/{id}", get(update_link_page_handler))
}

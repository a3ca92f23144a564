//! API route configuration.

use crate::api::handlers::{
    create_link_handler, create_user_handler, delete_link_handler, delete_user_handler,
    get_link_handler, like_link_handler, list_labels_handler, list_links_handler,
    update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All JSON API routes.
///
/// # Endpoints
///
/// - `GET    /links`              - List links
/// - `POST   /links`              - Create a link (`X-User-Id` required)
/// - `GET    /links/{id}`         - Get a link
/// - `PUT    /links/{id}`         - Replace a link's fields
/// - `PATCH  /links/{id}`         - Same as `PUT`
/// - `DELETE /links/{id}`         - Delete a link
/// - `POST   /links/{id}/likes`   - Like a link (`X-User-Id` required)
/// - `POST   /users`              - Register a user
/// - `DELETE /users/{id}`         - Soft-delete a user
/// - `GET    /labels/{kind}`      - List categories, types or tags
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{id}",
            get(get_link_handler)
                .put(update_link_handler)
                .patch(update_link_handler)
                .delete(delete_link_handler),
        )
        .route("/links/{id}/likes", post(like_link_handler))
        .route("/users", post(create_user_handler))
        .route("/users/{id}", delete(delete_user_handler))
        .route("/labels/{kind}", get(list_labels_handler))
}

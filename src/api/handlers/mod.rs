//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod labels;
pub mod links;
pub mod users;

pub use health::health_handler;
pub use labels::list_labels_handler;
pub use links::{
    create_link_handler, delete_link_handler, get_link_handler, like_link_handler,
    list_links_handler, update_link_handler,
};
pub use users::{create_user_handler, delete_user_handler};

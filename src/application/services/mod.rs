//! Business logic services for the application layer.

pub mod label_service;
pub mod link_service;
pub mod user_service;

pub use label_service::LabelService;
pub use link_service::LinkService;
pub use user_service::{NewUserRequest, UserService};

//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::label_service::LabelService`] - Category, type and tag get-or-create
//! - [`services::link_service::LinkService`] - Link aggregate composition and likes
//! - [`services::user_service::UserService`] - User registration and deletion

pub mod services;

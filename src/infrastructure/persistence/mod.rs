//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User registration and soft deletion
//! - [`PgLabelRepository`] - Category, type and tag lookup
//! - [`PgLinkRepository`] - Link aggregate storage with tag associations
//! - [`PgLikeRepository`] - Per-user likes

pub mod pg_label_repository;
pub mod pg_like_repository;
pub mod pg_link_repository;
pub mod pg_user_repository;

pub use pg_label_repository::PgLabelRepository;
pub use pg_like_repository::PgLikeRepository;
pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;

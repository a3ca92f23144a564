//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented in `crate::infrastructure::persistence`.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User registration and soft deletion
//! - [`LabelRepository`] - Category, type and tag get-or-create
//! - [`LinkRepository`] - Link aggregate CRUD
//! - [`LikeRepository`] - Per-(user, link) likes
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod label_repository;
pub mod like_repository;
pub mod link_repository;
pub mod user_repository;

pub use label_repository::LabelRepository;
pub use like_repository::LikeRepository;
pub use link_repository::LinkRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use label_repository::MockLabelRepository;
#[cfg(test)]
pub use like_repository::MockLikeRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;

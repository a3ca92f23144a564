//! Repository trait for category, type and tag lookup.

use crate::domain::entities::{Label, LabelKind};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for uniquely titled labels.
///
/// Every method takes the [`LabelKind`] that selects the collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLabelRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LabelRepository: Send + Sync {
    /// Finds a label by its exact title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_title(&self, kind: LabelKind, title: &str)
    -> Result<Option<Label>, AppError>;

    /// Returns the label with `title`, inserting it first if it is missing.
    ///
    /// Runs as a single atomic statement: concurrent callers with the same
    /// title all receive the same row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_or_create(&self, kind: LabelKind, title: &str) -> Result<Label, AppError>;

    /// Lists all labels of a kind ordered by title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, kind: LabelKind) -> Result<Vec<Label>, AppError>;
}

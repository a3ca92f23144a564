//! Repository trait for likes.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for per-(user, link) likes.
///
/// Like counts are read with the link itself, see
/// [`LinkRepository`](super::LinkRepository).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Records a like unless one already exists for the pair.
    ///
    /// Returns `Ok(true)` if a like was inserted, `Ok(false)` if the pair was
    /// already present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user or link does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn add(&self, user_id: i64, link_id: i64) -> Result<bool, AppError>;
}

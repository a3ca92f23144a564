//! Get-or-create lookup for categories, types and tags.

use std::sync::Arc;

use crate::domain::entities::{Label, LabelKind};
use crate::domain::repositories::LabelRepository;
use crate::error::AppError;
use crate::utils::label::{MAX_LABEL_LENGTH, normalize_label};
use serde_json::json;

/// Lookup service for one kind of label.
///
/// One instance exists per [`LabelKind`]. All instances share the same
/// repository.
pub struct LabelService<R: LabelRepository> {
    repository: Arc<R>,
    kind: LabelKind,
}

impl<R: LabelRepository> LabelService<R> {
    /// Creates a lookup service for `kind`.
    pub fn new(repository: Arc<R>, kind: LabelKind) -> Self {
        Self { repository, kind }
    }

    /// Returns the label titled `title`, creating it on first use.
    ///
    /// Surrounding whitespace is trimmed first (see [`normalize_label`]). An existing
    /// label is returned without any write. A missing one is inserted through
    /// the repository's atomic upsert, so a concurrent request creating the
    /// same title yields the same row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title is blank or longer than
    /// [`MAX_LABEL_LENGTH`] characters.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_or_create(&self, title: &str) -> Result<Label, AppError> {
        let title = self.validate_title(title)?;

        if let Some(existing) = self.repository.find_by_title(self.kind, &title).await? {
            return Ok(existing);
        }

        let label = self.repository.get_or_create(self.kind, &title).await?;
        tracing::debug!(
            kind = %self.kind,
            label_id = label.id,
            title = %label.title,
            "Label created"
        );

        Ok(label)
    }

    /// Lists every label of this kind ordered by title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self) -> Result<Vec<Label>, AppError> {
        self.repository.list(self.kind).await
    }

    fn validate_title(&self, raw: &str) -> Result<String, AppError> {
        let title = normalize_label(raw);

        if title.is_empty() {
            return Err(AppError::bad_request(
                format!("The {} must not be empty", self.kind),
                json!({ "field": self.kind.as_str() }),
            ));
        }

        if title.chars().count() > MAX_LABEL_LENGTH {
            return Err(AppError::bad_request(
                format!(
                    "The {} must be at most {} characters",
                    self.kind, MAX_LABEL_LENGTH
                ),
                json!({ "field": self.kind.as_str(), "max": MAX_LABEL_LENGTH }),
            ));
        }

        Ok(title)
    }
}

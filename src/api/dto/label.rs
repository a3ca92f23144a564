//! DTOs for label listing.

use serde::Serialize;

use crate::domain::entities::Label;

/// A category, type or tag.
#[derive(Debug, Serialize)]
pub struct LabelResponse {
    pub id: i64,
    pub title: String,
}

impl From<Label> for LabelResponse {
    fn from(label: Label) -> Self {
        LabelResponse {
            id: label.id,
            title: label.title,
        }
    }
}

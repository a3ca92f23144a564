//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::domain::entities::{Link, LinkSubmission};
use crate::utils::label::split_tag_list;

/// Request body for creating or updating a link.
///
/// Labels are plain text and are created on first use. Updates replace every
/// field, so the same body shape serves `POST`, `PUT` and `PATCH`.
#[derive(Debug, Deserialize, Validate)]
pub struct LinkRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// Target address. `linkURL` is accepted for form compatibility.
    #[serde(alias = "linkURL")]
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100, message = "Type must be 1-100 characters"))]
    pub link_type: String,

    /// A JSON array, or one comma-separated string as typed into a form.
    #[serde(default, deserialize_with = "tags_from_list_or_string")]
    pub tags: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagsField {
    List(Vec<String>),
    Joined(String),
}

fn tags_from_list_or_string<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TagsField::deserialize(deserializer)? {
        TagsField::List(tags) => tags,
        TagsField::Joined(joined) => split_tag_list(&joined),
    })
}

impl From<LinkRequest> for LinkSubmission {
    fn from(req: LinkRequest) -> Self {
        LinkSubmission {
            title: req.title,
            url: req.url,
            description: req.description.unwrap_or_default(),
            category: req.category,
            link_type: req.link_type,
            tags: req.tags,
        }
    }
}

/// The user who submitted a link.
#[derive(Debug, Serialize)]
pub struct CreatedBy {
    pub id: i64,
    pub name: String,
}

/// JSON representation of a link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub link_type: String,
    pub tags: Vec<String>,
    pub created_by: CreatedBy,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        let tags = link.tag_titles();

        LinkResponse {
            id: link.id,
            title: link.title,
            url: link.url,
            description: link.description,
            category: link.category.title,
            link_type: link.link_type.title,
            tags,
            created_by: CreatedBy {
                id: link.created_by.id,
                name: link.created_by.name,
            },
            likes: link.likes,
            created_at: link.created_at,
        }
    }
}

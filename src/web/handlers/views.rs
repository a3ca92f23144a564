//! View models shared by the page templates.

use askama::Template;
use askama_web::WebTemplate;

use crate::domain::entities::Link;

/// A link flattened for display.
pub struct LinkView {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: String,
    pub link_type: String,
    pub tags: Vec<String>,
    /// Tags joined with `,` for the edit form.
    pub joined_tags: String,
    pub creator: String,
    pub likes: i64,
    pub created_at: String,
}

impl From<Link> for LinkView {
    fn from(link: Link) -> Self {
        LinkView {
            id: link.id,
            tags: link.tag_titles(),
            joined_tags: link.joined_tags(),
            title: link.title,
            url: link.url,
            description: link.description,
            category: link.category.title,
            link_type: link.link_type.title,
            creator: link.created_by.name,
            likes: link.likes,
            created_at: link.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Page rendered when a requested link does not exist.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub message: String,
}

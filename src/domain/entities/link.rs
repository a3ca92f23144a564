//! Link aggregate: a bookmark with its category, type, tags and creator.

use chrono::{DateTime, Utc};

use super::label::Label;

/// The user who submitted a link, as seen from the link.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkOwner {
    pub id: i64,
    pub name: String,
}

/// A stored bookmark with every reference resolved.
///
/// `tags` holds no duplicates and is ordered by title. `likes` is the number
/// of users who liked the link.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: Label,
    pub link_type: Label,
    pub tags: Vec<Label>,
    pub created_by: LinkOwner,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: String,
        url: String,
        description: String,
        category: Label,
        link_type: Label,
        tags: Vec<Label>,
        created_by: LinkOwner,
        likes: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            url,
            description,
            category,
            link_type,
            tags,
            created_by,
            likes,
            created_at,
        }
    }

    pub fn tag_titles(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.title.clone()).collect()
    }

    /// Tag titles joined with `,`, the format the edit form uses.
    pub fn joined_tags(&self) -> String {
        self.tag_titles().join(",")
    }
}

/// Fields a user submits for a link, with labels as plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkSubmission {
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: String,
    pub link_type: String,
    pub tags: Vec<String>,
}

/// Input data for inserting a link whose labels are already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub title: String,
    pub url: String,
    pub description: String,
    pub category_id: i64,
    pub type_id: i64,
    pub tag_ids: Vec<i64>,
    pub created_by: i64,
}

/// Replacement values for every mutable field of a link.
///
/// The tag set is replaced as a whole. Id, creator and creation time are not
/// part of it and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkChanges {
    pub title: String,
    pub url: String,
    pub description: String,
    pub category_id: i64,
    pub type_id: i64,
    pub tag_ids: Vec<i64>,
}

impl From<NewLink> for LinkChanges {
    fn from(new_link: NewLink) -> Self {
        Self {
            title: new_link.title,
            url: new_link.url,
            description: new_link.description,
            category_id: new_link.category_id,
            type_id: new_link.type_id,
            tag_ids: new_link.tag_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LabelKind;

    fn sample_link(tags: Vec<Label>) -> Link {
        Link::new(
            1,
            "Spring Boot Docs".to_string(),
            "https://docs.spring.io/spring-boot/".to_string(),
            "Official documentation".to_string(),
            Label::new(1, LabelKind::Category, "Spring".to_string()),
            Label::new(1, LabelKind::Type, "Document".to_string()),
            tags,
            LinkOwner {
                id: 3,
                name: "Jinseong".to_string(),
            },
            0,
            Utc::now(),
        )
    }

    #[test]
    fn test_link_creation() {
        let link = sample_link(vec![]);

        assert_eq!(link.id, 1);
        assert_eq!(link.category.title, "Spring");
        assert_eq!(link.link_type.title, "Document");
        assert_eq!(link.created_by.id, 3);
        assert!(link.tags.is_empty());
        assert_eq!(link.joined_tags(), "");
    }

    #[test]
    fn test_joined_tags() {
        let link = sample_link(vec![
            Label::new(1, LabelKind::Tag, "java".to_string()),
            Label::new(2, LabelKind::Tag, "spring".to_string()),
        ]);

        assert_eq!(link.tag_titles(), vec!["java", "spring"]);
        assert_eq!(link.joined_tags(), "java,spring");
    }

    #[test]
    fn test_changes_from_new_link_drops_creator() {
        let new_link = NewLink {
            title: "Rust Book".to_string(),
            url: "https://doc.rust-lang.org/book/".to_string(),
            description: String::new(),
            category_id: 4,
            type_id: 5,
            tag_ids: vec![6, 7],
            created_by: 9,
        };

        let changes = LinkChanges::from(new_link);

        assert_eq!(changes.title, "Rust Book");
        assert_eq!(changes.category_id, 4);
        assert_eq!(changes.tag_ids, vec![6, 7]);
    }
}

//! Link aggregate composition, update, deletion and likes.

use std::sync::Arc;

use crate::application::services::LabelService;
use crate::domain::entities::{LabelKind, Link, LinkChanges, LinkSubmission, NewLink, User};
use crate::domain::repositories::{LabelRepository, LikeRepository, LinkRepository};
use crate::error::AppError;
use crate::utils::label::normalize_tags;
use crate::utils::url_validator::validate_link_url;
use serde_json::json;

/// Longest accepted link title, in characters.
const MAX_TITLE_LENGTH: usize = 255;

/// Service for creating, reading, updating and deleting links.
///
/// Submitted category, type and tag labels are resolved through one
/// [`LabelService`] per kind before anything is written.
pub struct LinkService<L: LinkRepository, R: LabelRepository, K: LikeRepository> {
    link_repository: Arc<L>,
    like_repository: Arc<K>,
    categories: LabelService<R>,
    types: LabelService<R>,
    tags: LabelService<R>,
}

impl<L: LinkRepository, R: LabelRepository, K: LikeRepository> LinkService<L, R, K> {
    /// Creates a new link service.
    pub fn new(
        link_repository: Arc<L>,
        label_repository: Arc<R>,
        like_repository: Arc<K>,
    ) -> Self {
        Self {
            link_repository,
            like_repository,
            categories: LabelService::new(label_repository.clone(), LabelKind::Category),
            types: LabelService::new(label_repository.clone(), LabelKind::Type),
            tags: LabelService::new(label_repository, LabelKind::Tag),
        }
    }

    /// Lookup service for one label kind.
    pub fn labels(&self, kind: LabelKind) -> &LabelService<R> {
        match kind {
            LabelKind::Category => &self.categories,
            LabelKind::Type => &self.types,
            LabelKind::Tag => &self.tags,
        }
    }

    /// Lists every stored link in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Creates a link owned by `owner`.
    ///
    /// # Flow
    ///
    /// 1. Validate title and URL
    /// 2. Resolve (get or create) category, type and each tag
    /// 3. Insert the link and its tag associations
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title, URL or a label is invalid.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_link(
        &self,
        submission: LinkSubmission,
        owner: &User,
    ) -> Result<Link, AppError> {
        let new_link = self.resolve_submission(submission, owner.id).await?;

        let link = self.link_repository.create(new_link).await?;
        tracing::info!(link_id = link.id, user_id = owner.id, "Link created");

        Ok(link)
    }

    /// Retrieves a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link(&self, id: i64) -> Result<Link, AppError> {
        self.find_link(id).await
    }

    /// Replaces every mutable field of a link with a fresh resolution of
    /// `submission`.
    ///
    /// Title, URL, description, category, type and the whole tag set are
    /// overwritten. Id, creator and creation time are kept. Applying the same
    /// submission twice leaves the same stored values.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Validation`] if the submission is invalid.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_link(
        &self,
        id: i64,
        submission: LinkSubmission,
    ) -> Result<Link, AppError> {
        let existing = self.find_link(id).await?;
        let resolved = self
            .resolve_submission(submission, existing.created_by.id)
            .await?;

        let link = self
            .link_repository
            .update(id, LinkChanges::from(resolved))
            .await?;
        tracing::info!(link_id = id, "Link updated");

        Ok(link)
    }

    /// Deletes a link and returns its last stored state.
    ///
    /// Categories, types and tags it referenced are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_link(&self, id: i64) -> Result<Link, AppError> {
        let link = self.find_link(id).await?;

        if !self.link_repository.delete(id).await? {
            return Err(link_not_found(id));
        }
        tracing::info!(link_id = id, "Link deleted");

        Ok(link)
    }

    /// Records that `user` likes the link.
    ///
    /// Liking the same link twice is a no-op. Returns `true` when a new like
    /// was stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_like(&self, link_id: i64, user: &User) -> Result<bool, AppError> {
        let link = self.find_link(link_id).await?;

        let created = self.like_repository.add(user.id, link.id).await?;
        if created {
            tracing::info!(link_id, user_id = user.id, "Link liked");
        } else {
            tracing::debug!(link_id, user_id = user.id, "Link already liked");
        }

        Ok(created)
    }

    async fn find_link(&self, id: i64) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| link_not_found(id))
    }

    /// Validates scalar fields and resolves every label of a submission.
    async fn resolve_submission(
        &self,
        submission: LinkSubmission,
        created_by: i64,
    ) -> Result<NewLink, AppError> {
        let title = submission.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::bad_request(
                "Title must not be empty",
                json!({ "field": "title" }),
            ));
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(AppError::bad_request(
                format!("Title must be at most {MAX_TITLE_LENGTH} characters"),
                json!({ "field": "title", "max": MAX_TITLE_LENGTH }),
            ));
        }

        let url = submission.url.trim().to_string();
        validate_link_url(&url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let category = self.categories.get_or_create(&submission.category).await?;
        let link_type = self.types.get_or_create(&submission.link_type).await?;

        let mut tag_ids = Vec::new();
        for title in normalize_tags(&submission.tags) {
            let tag = self.tags.get_or_create(&title).await?;
            if !tag_ids.contains(&tag.id) {
                tag_ids.push(tag.id);
            }
        }

        Ok(NewLink {
            title,
            url,
            description: submission.description.trim().to_string(),
            category_id: category.id,
            type_id: link_type.id,
            tag_ids,
            created_by,
        })
    }
}

fn link_not_found(id: i64) -> AppError {
    AppError::not_found("Link not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Label, LinkOwner};
    use crate::domain::repositories::{
        MockLabelRepository, MockLikeRepository, MockLinkRepository,
    };
    use chrono::Utc;

    fn create_test_user(id: i64) -> User {
        User::new(
            id,
            format!("user{id}@example.com"),
            format!("User {id}"),
            "hash".to_string(),
            false,
            Utc::now(),
        )
    }

    fn create_test_link(id: i64, title: &str, owner: i64) -> Link {
        Link::new(
            id,
            title.to_string(),
            "https://docs.spring.io/spring-boot/".to_string(),
            "Official documentation".to_string(),
            Label::new(1, LabelKind::Category, "Spring".to_string()),
            Label::new(2, LabelKind::Type, "Document".to_string()),
            vec![],
            LinkOwner {
                id: owner,
                name: format!("User {owner}"),
            },
            0,
            Utc::now(),
        )
    }

    fn submission(title: &str, category: &str, tags: &[&str]) -> LinkSubmission {
        LinkSubmission {
            title: title.to_string(),
            url: "https://docs.spring.io/spring-boot/".to_string(),
            description: "Official documentation".to_string(),
            category: category.to_string(),
            link_type: "Document".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Label repository where every lookup misses and creation assigns ids
    /// derived from the kind and title length.
    fn creating_label_repo() -> MockLabelRepository {
        let mut repo = MockLabelRepository::new();
        repo.expect_find_by_title().returning(|_, _| Ok(None));
        repo.expect_get_or_create().returning(|kind, title| {
            let base = match kind {
                LabelKind::Category => 100,
                LabelKind::Type => 200,
                LabelKind::Tag => 300,
            };
            Ok(Label::new(base + title.len() as i64, kind, title.to_string()))
        });
        repo
    }

    fn service(
        link_repo: MockLinkRepository,
        label_repo: MockLabelRepository,
        like_repo: MockLikeRepository,
    ) -> LinkService<MockLinkRepository, MockLabelRepository, MockLikeRepository> {
        LinkService::new(
            Arc::new(link_repo),
            Arc::new(label_repo),
            Arc::new(like_repo),
        )
    }

    #[tokio::test]
    async fn test_create_link_resolves_labels_and_owner() {
        let mut link_repo = MockLinkRepository::new();

        link_repo
            .expect_create()
            .withf(|new_link| {
                new_link.title == "Spring Boot Docs"
                    && new_link.url == "https://docs.spring.io/spring-boot/"
                    && new_link.category_id == 106
                    && new_link.type_id == 208
                    && new_link.tag_ids == vec![304, 306]
                    && new_link.created_by == 7
            })
            .times(1)
            .returning(|_| Ok(create_test_link(1, "Spring Boot Docs", 7)));

        let service = service(link_repo, creating_label_repo(), MockLikeRepository::new());

        let owner = create_test_user(7);
        let result = service
            .create_link(
                submission("Spring Boot Docs", "Spring", &["java", "spring"]),
                &owner,
            )
            .await
            .unwrap();

        assert_eq!(result.created_by.id, owner.id);
        assert_eq!(result.title, "Spring Boot Docs");
    }

    #[tokio::test]
    async fn test_create_link_deduplicates_tags() {
        let mut link_repo = MockLinkRepository::new();

        link_repo
            .expect_create()
            .withf(|new_link| new_link.tag_ids == vec![304])
            .times(1)
            .returning(|_| Ok(create_test_link(1, "Docs", 1)));

        let service = service(link_repo, creating_label_repo(), MockLikeRepository::new());

        let result = service
            .create_link(
                submission("Docs", "Spring", &["java", " java ", "", "java"]),
                &create_test_user(1),
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_link_without_tags() {
        let mut link_repo = MockLinkRepository::new();

        link_repo
            .expect_create()
            .withf(|new_link| new_link.tag_ids.is_empty())
            .times(1)
            .returning(|_| Ok(create_test_link(1, "Docs", 1)));

        let service = service(link_repo, creating_label_repo(), MockLikeRepository::new());

        let result = service
            .create_link(submission("Docs", "Spring", &[]), &create_test_user(1))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_link_reuses_existing_category() {
        let mut label_repo = MockLabelRepository::new();
        label_repo
            .expect_find_by_title()
            .returning(|kind, title| Ok(Some(Label::new(42, kind, title.to_string()))));
        label_repo.expect_get_or_create().times(0);

        let mut link_repo = MockLinkRepository::new();
        link_repo
            .expect_create()
            .withf(|new_link| new_link.category_id == 42 && new_link.type_id == 42)
            .times(1)
            .returning(|_| Ok(create_test_link(2, "Docs", 1)));

        let service = service(link_repo, label_repo, MockLikeRepository::new());

        let result = service
            .create_link(submission("Docs", "Spring", &[]), &create_test_user(1))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_link_rejects_invalid_url() {
        let mut link_repo = MockLinkRepository::new();
        link_repo.expect_create().times(0);

        let service = service(
            link_repo,
            MockLabelRepository::new(),
            MockLikeRepository::new(),
        );

        let mut invalid = submission("Docs", "Spring", &[]);
        invalid.url = "javascript:alert(1)".to_string();

        let result = service.create_link(invalid, &create_test_user(1)).await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_link_rejects_blank_title() {
        let mut link_repo = MockLinkRepository::new();
        link_repo.expect_create().times(0);

        let service = service(
            link_repo,
            MockLabelRepository::new(),
            MockLikeRepository::new(),
        );

        let result = service
            .create_link(submission("   ", "Spring", &[]), &create_test_user(1))
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_link_rejects_blank_category() {
        let mut link_repo = MockLinkRepository::new();
        link_repo.expect_create().times(0);

        let service = service(
            link_repo,
            MockLabelRepository::new(),
            MockLikeRepository::new(),
        );

        let result = service
            .create_link(submission("Docs", "  ", &[]), &create_test_user(1))
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_get_link_not_found() {
        let mut link_repo = MockLinkRepository::new();
        link_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(
            link_repo,
            MockLabelRepository::new(),
            MockLikeRepository::new(),
        );

        let result = service.get_link(99).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_link_keeps_creator() {
        let mut link_repo = MockLinkRepository::new();

        link_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(create_test_link(id, "Old Title", 5))));

        link_repo
            .expect_update()
            .withf(|id, changes| {
                *id == 3
                    && changes.title == "New Title"
                    && changes.category_id == 110
                    && changes.tag_ids == vec![304]
            })
            .times(1)
            .returning(|id, changes| {
                let mut link = create_test_link(id, &changes.title, 5);
                link.category = Label::new(
                    changes.category_id,
                    LabelKind::Category,
                    "SpringBoot".to_string(),
                );
                Ok(link)
            });

        let service = service(link_repo, creating_label_repo(), MockLikeRepository::new());

        let result = service
            .update_link(3, submission("New Title", "SpringBoot", &["java"]))
            .await
            .unwrap();

        assert_eq!(result.id, 3);
        assert_eq!(result.title, "New Title");
        assert_eq!(result.created_by.id, 5);
        assert_eq!(result.category.title, "SpringBoot");
    }

    #[tokio::test]
    async fn test_update_link_not_found() {
        let mut link_repo = MockLinkRepository::new();
        link_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        link_repo.expect_update().times(0);

        let service = service(
            link_repo,
            MockLabelRepository::new(),
            MockLikeRepository::new(),
        );

        let result = service
            .update_link(404, submission("New Title", "Spring", &[]))
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_link_returns_deleted_value() {
        let mut link_repo = MockLinkRepository::new();
        link_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(create_test_link(id, "Doomed", 1))));
        link_repo
            .expect_delete()
            .withf(|id| *id == 8)
            .times(1)
            .returning(|_| Ok(true));

        let service = service(
            link_repo,
            MockLabelRepository::new(),
            MockLikeRepository::new(),
        );

        let deleted = service.delete_link(8).await.unwrap();

        assert_eq!(deleted.id, 8);
        assert_eq!(deleted.title, "Doomed");
    }

    #[tokio::test]
    async fn test_delete_link_not_found() {
        let mut link_repo = MockLinkRepository::new();
        link_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        link_repo.expect_delete().times(0);

        let service = service(
            link_repo,
            MockLabelRepository::new(),
            MockLikeRepository::new(),
        );

        let result = service.delete_link(8).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_add_like_records_new_like() {
        let mut link_repo = MockLinkRepository::new();
        link_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(create_test_link(id, "Liked", 1))));

        let mut like_repo = MockLikeRepository::new();
        like_repo
            .expect_add()
            .withf(|user_id, link_id| *user_id == 2 && *link_id == 4)
            .times(1)
            .returning(|_, _| Ok(true));

        let service = service(link_repo, MockLabelRepository::new(), like_repo);

        let created = service.add_like(4, &create_test_user(2)).await.unwrap();

        assert!(created);
    }

    #[tokio::test]
    async fn test_add_like_twice_is_noop() {
        let mut link_repo = MockLinkRepository::new();
        link_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(create_test_link(id, "Liked", 1))));

        let mut like_repo = MockLikeRepository::new();
        like_repo.expect_add().times(1).returning(|_, _| Ok(false));

        let service = service(link_repo, MockLabelRepository::new(), like_repo);

        let result = service.add_like(4, &create_test_user(2)).await;

        assert!(matches!(result, Ok(false)));
    }

    #[tokio::test]
    async fn test_add_like_unknown_link() {
        let mut link_repo = MockLinkRepository::new();
        link_repo.expect_find_by_id().returning(|_| Ok(None));

        let mut like_repo = MockLikeRepository::new();
        like_repo.expect_add().times(0);

        let service = service(link_repo, MockLabelRepository::new(), like_repo);

        let result = service.add_like(4, &create_test_user(2)).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}

#![allow(dead_code)]

use linkhub::domain::entities::{LinkSubmission, NewLink};
use linkhub::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub async fn create_test_user(pool: &PgPool, email: &str, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (email, name, password_hash) VALUES ($1, $2, 'hash') RETURNING id",
    )
    .bind(email)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_deleted_user(pool: &PgPool, email: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (email, name, password_hash, deleted) VALUES ($1, 'Gone', 'hash', TRUE) RETURNING id",
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a label row into `table` (`categories`, `types` or `tags`).
pub async fn create_label(pool: &PgPool, table: &str, title: &str) -> i64 {
    sqlx::query_scalar(&format!(
        "INSERT INTO {table} (title) VALUES ($1) RETURNING id"
    ))
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

/// A fully resolved link owned by `created_by`, with fresh labels.
pub async fn new_link(pool: &PgPool, created_by: i64, tags: &[&str]) -> NewLink {
    let category_id = create_label(pool, "categories", "Spring").await;
    let type_id = create_label(pool, "types", "Document").await;
    let mut tag_ids = Vec::new();
    for tag in tags {
        tag_ids.push(create_label(pool, "tags", tag).await);
    }

    NewLink {
        title: "Spring Boot Docs".to_string(),
        url: "https://docs.spring.io/spring-boot/".to_string(),
        description: "Official documentation".to_string(),
        category_id,
        type_id,
        tag_ids,
        created_by,
    }
}

pub fn submission(title: &str, category: &str, tags: &[&str]) -> LinkSubmission {
    LinkSubmission {
        title: title.to_string(),
        url: "https://example.com/article".to_string(),
        description: String::new(),
        category: category.to_string(),
        link_type: "Article".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

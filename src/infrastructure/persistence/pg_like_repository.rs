//! PostgreSQL implementation of like repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::LikeRepository;
use crate::error::AppError;

/// PostgreSQL repository for likes.
///
/// The `(user_id, link_id)` primary key enforces one like per pair.
pub struct PgLikeRepository {
    pool: Arc<PgPool>,
}

impl PgLikeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    async fn add(&self, user_id: i64, link_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO likes (user_id, link_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, link_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(link_id)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| missing_like_target(e, user_id, link_id))?;

        Ok(result.rows_affected() == 1)
    }
}

/// A foreign key failure means the user or link vanished before the insert,
/// e.g. the link was deleted concurrently.
fn missing_like_target(e: sqlx::Error, user_id: i64, link_id: i64) -> AppError {
    let constraint = e
        .as_database_error()
        .filter(|db| db.is_foreign_key_violation())
        .map(|db| db.constraint().unwrap_or_default().to_string());

    match constraint.as_deref() {
        Some("likes_user_id_fkey") => {
            AppError::not_found("User not found", json!({ "id": user_id }))
        }
        Some(_) => AppError::not_found("Link not found", json!({ "id": link_id })),
        None => e.into(),
    }
}

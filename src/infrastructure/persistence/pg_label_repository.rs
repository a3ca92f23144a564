//! PostgreSQL implementation of label repository.
//!
//! Categories, types and tags live in three tables with the same shape. The
//! table name comes from [`LabelKind::table`], a closed set of static strings,
//! so it is safe to splice into the query text.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Label, LabelKind};
use crate::domain::repositories::LabelRepository;
use crate::error::AppError;

pub struct PgLabelRepository {
    pool: Arc<PgPool>,
}

impl PgLabelRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct LabelRow {
    id: i64,
    title: String,
}

impl LabelRow {
    fn into_label(self, kind: LabelKind) -> Label {
        Label::new(self.id, kind, self.title)
    }
}

#[async_trait]
impl LabelRepository for PgLabelRepository {
    async fn find_by_title(
        &self,
        kind: LabelKind,
        title: &str,
    ) -> Result<Option<Label>, AppError> {
        let sql = format!("SELECT id, title FROM {} WHERE title = $1", kind.table());

        let row = sqlx::query_as::<_, LabelRow>(&sql)
            .bind(title)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(|r| r.into_label(kind)))
    }

    async fn get_or_create(&self, kind: LabelKind, title: &str) -> Result<Label, AppError> {
        // The no-op update makes RETURNING yield the existing row on conflict.
        let sql = format!(
            r#"
            INSERT INTO {} (title)
            VALUES ($1)
            ON CONFLICT (title) DO UPDATE SET title = EXCLUDED.title
            RETURNING id, title
            "#,
            kind.table()
        );

        let row = sqlx::query_as::<_, LabelRow>(&sql)
            .bind(title)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into_label(kind))
    }

    async fn list(&self, kind: LabelKind) -> Result<Vec<Label>, AppError> {
        let sql = format!("SELECT id, title FROM {} ORDER BY title", kind.table());

        let rows = sqlx::query_as::<_, LabelRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(|r| r.into_label(kind)).collect())
    }
}

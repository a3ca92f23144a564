//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgConnection, PgPool};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Label, LabelKind, Link, LinkChanges, LinkOwner, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for the link aggregate.
///
/// A link spans `links`, `link_tags` and the label and user tables it points
/// to. Writes touching more than one table run in a transaction.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct LinkRow {
    id: i64,
    title: String,
    url: String,
    description: String,
    category_id: i64,
    category_title: String,
    type_id: i64,
    type_title: String,
    created_by: i64,
    creator_name: String,
    likes: i64,
    created_at: DateTime<Utc>,
}

#[derive(FromRow)]
struct LinkTagRow {
    link_id: i64,
    tag_id: i64,
    title: String,
}

/// Loads links with every reference resolved. `None` loads all of them.
async fn fetch_links(conn: &mut PgConnection, id: Option<i64>) -> Result<Vec<Link>, AppError> {
    let rows = sqlx::query_as::<_, LinkRow>(
        r#"
        SELECT
            l.id,
            l.title,
            l.url,
            l.description,
            l.category_id,
            c.title AS category_title,
            l.type_id,
            t.title AS type_title,
            l.created_by,
            u.name AS creator_name,
            (SELECT COUNT(*) FROM likes k WHERE k.link_id = l.id) AS likes,
            l.created_at
        FROM links l
        JOIN categories c ON c.id = l.category_id
        JOIN types t ON t.id = l.type_id
        JOIN users u ON u.id = l.created_by
        WHERE ($1::BIGINT IS NULL OR l.id = $1)
        ORDER BY l.id
        "#,
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await?;

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let tag_rows = sqlx::query_as::<_, LinkTagRow>(
        r#"
        SELECT lt.link_id, g.id AS tag_id, g.title
        FROM link_tags lt
        JOIN tags g ON g.id = lt.tag_id
        WHERE lt.link_id = ANY($1)
        ORDER BY g.title
        "#,
    )
    .bind(&ids)
    .fetch_all(&mut *conn)
    .await?;

    let mut tags_by_link: HashMap<i64, Vec<Label>> = HashMap::new();
    for tag in tag_rows {
        tags_by_link
            .entry(tag.link_id)
            .or_default()
            .push(Label::new(tag.tag_id, LabelKind::Tag, tag.title));
    }

    Ok(rows
        .into_iter()
        .map(|r| {
            let tags = tags_by_link.remove(&r.id).unwrap_or_default();
            Link::new(
                r.id,
                r.title,
                r.url,
                r.description,
                Label::new(r.category_id, LabelKind::Category, r.category_title),
                Label::new(r.type_id, LabelKind::Type, r.type_title),
                tags,
                LinkOwner {
                    id: r.created_by,
                    name: r.creator_name,
                },
                r.likes,
                r.created_at,
            )
        })
        .collect())
}

async fn fetch_link(conn: &mut PgConnection, id: i64) -> Result<Option<Link>, AppError> {
    Ok(fetch_links(conn, Some(id)).await?.into_iter().next())
}

async fn insert_tags(
    conn: &mut PgConnection,
    link_id: i64,
    tag_ids: &[i64],
) -> Result<(), AppError> {
    if tag_ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO link_tags (link_id, tag_id)
        SELECT $1, UNNEST($2::BIGINT[])
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(link_id)
    .bind(tag_ids)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

fn vanished(id: i64) -> AppError {
    AppError::internal("Link vanished during write", json!({ "id": id }))
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO links (title, url, description, category_id, type_id, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&new_link.title)
        .bind(&new_link.url)
        .bind(&new_link.description)
        .bind(new_link.category_id)
        .bind(new_link.type_id)
        .bind(new_link.created_by)
        .fetch_one(&mut *tx)
        .await?;

        insert_tags(&mut tx, id, &new_link.tag_ids).await?;
        let link = fetch_link(&mut tx, id).await?.ok_or_else(|| vanished(id))?;

        tx.commit().await?;

        Ok(link)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let mut conn = self.pool.acquire().await?;
        fetch_link(&mut conn, id).await
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let mut conn = self.pool.acquire().await?;
        fetch_links(&mut conn, None).await
    }

    async fn update(&self, id: i64, changes: LinkChanges) -> Result<Link, AppError> {
        let mut tx = self.pool.begin().await?;

        let updated: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE links
            SET title = $2,
                url = $3,
                description = $4,
                category_id = $5,
                type_id = $6
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.url)
        .bind(&changes.description)
        .bind(changes.category_id)
        .bind(changes.type_id)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Err(AppError::not_found("Link not found", json!({ "id": id })));
        }

        sqlx::query("DELETE FROM link_tags WHERE link_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        insert_tags(&mut tx, id, &changes.tag_ids).await?;

        let link = fetch_link(&mut tx, id).await?.ok_or_else(|| vanished(id))?;

        tx.commit().await?;

        Ok(link)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

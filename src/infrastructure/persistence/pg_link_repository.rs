//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink, OwnerToken, SortOrder};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const LINK_COLUMNS: &str = "id, code, long_url, client_id, clicks, created_at, updated_at";

/// PostgreSQL repository for link storage and retrieval.
///
/// Code uniqueness is enforced by the `links.code` unique constraint and click
/// increments are single `UPDATE` statements, so both hold across instances.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    long_url: String,
    client_id: String,
    clicks: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<LinkRow> for Link {
    type Error = AppError;

    fn try_from(row: LinkRow) -> Result<Self, Self::Error> {
        let owner = OwnerToken::parse(&row.client_id).ok_or_else(|| {
            AppError::store(
                "Stored link has an empty client id",
                json!({ "code": row.code }),
            )
        })?;

        Ok(Link::new(
            row.id,
            row.code,
            row.long_url,
            owner,
            row.clicks,
            row.created_at,
            row.updated_at,
        ))
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            r#"
            INSERT INTO links (code, long_url, client_id)
            VALUES ($1, $2, $3)
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(&new_link.code)
        .bind(&new_link.long_url)
        .bind(new_link.owner.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Link::try_from).transpose()
    }

    async fn find_by_client(
        &self,
        owner: &OwnerToken,
        limit: i64,
        order: SortOrder,
    ) -> Result<Vec<Link>, AppError> {
        let ordering = match order {
            SortOrder::NewestFirst => "created_at DESC, id DESC",
            SortOrder::OldestFirst => "created_at ASC, id ASC",
        };

        let rows = sqlx::query_as::<_, LinkRow>(&format!(
            r#"
            SELECT {LINK_COLUMNS}
            FROM links
            WHERE client_id = $1
            ORDER BY {ordering}
            LIMIT $2
            "#
        ))
        .bind(owner.as_str())
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Link::try_from).collect()
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            r#"
            UPDATE links
            SET clicks = clicks + 1,
                updated_at = NOW()
            WHERE code = $1
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Link::try_from).transpose()
    }

    async fn delete_if_owned(&self, code: &str, owner: &OwnerToken) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE code = $1 AND client_id = $2")
            .bind(code)
            .bind(owner.as_str())
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}

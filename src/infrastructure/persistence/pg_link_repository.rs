//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// All statements are parameterized. Active-code uniqueness is enforced
/// by the `links_code_active_idx` partial unique index, and click
/// accounting is a single UPDATE so concurrent redirects cannot lose
/// increments.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (code, target_url)
            VALUES ($1, $2)
            RETURNING id, code, target_url, click_count, last_clicked_at,
                      created_at, updated_at, is_deleted
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.target_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_code(
        &self,
        code: &str,
        include_deleted: bool,
    ) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, code, target_url, click_count, last_clicked_at,
                   created_at, updated_at, is_deleted
            FROM links
            WHERE code = $1 AND (is_deleted = FALSE OR $2)
            "#,
        )
        .bind(code)
        .bind(include_deleted)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            UPDATE links
            SET click_count = click_count + 1,
                last_clicked_at = NOW(),
                updated_at = NOW()
            WHERE code = $1 AND is_deleted = FALSE
            RETURNING id, code, target_url, click_count, last_clicked_at,
                      created_at, updated_at, is_deleted
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn soft_delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE links
            SET is_deleted = TRUE,
                updated_at = NOW()
            WHERE code = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_active(&self) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, code, target_url, click_count, last_clicked_at,
                   created_at, updated_at, is_deleted
            FROM links
            WHERE is_deleted = FALSE
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}

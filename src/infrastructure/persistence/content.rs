use crate::domain::entities::{ContentBlock, Locale};
use crate::domain::ports::content_repository::ContentRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::{any::AnyRow, Row};

fn content_from_row(row: &AnyRow) -> ApiResult<ContentBlock> {
    let locale: String = row.try_get("locale")?;

    Ok(ContentBlock {
        id: row.try_get("id")?,
        key: row.try_get("key")?,
        locale: locale.parse().map_err(ApiError::Internal)?,
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl ContentRepository for Database {
    async fn list_content(&self, locale: Option<Locale>) -> ApiResult<Vec<ContentBlock>> {
        let rows = match locale {
            Some(locale) => {
                sqlx::query(
                    "SELECT id, key, locale, title, body, updated_at
                     FROM content_blocks WHERE locale = ? ORDER BY key ASC",
                )
                .bind(locale.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    "SELECT id, key, locale, title, body, updated_at
                     FROM content_blocks ORDER BY key ASC, locale ASC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(content_from_row).collect()
    }

    async fn upsert_content(&self, block: &ContentBlock) -> ApiResult<ContentBlock> {
        sqlx::query(
            "INSERT INTO content_blocks (id, key, locale, title, body, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(key, locale) DO UPDATE SET
                 title = excluded.title,
                 body = excluded.body,
                 updated_at = excluded.updated_at",
        )
        .bind(&block.id)
        .bind(&block.key)
        .bind(block.locale.as_str())
        .bind(&block.title)
        .bind(&block.body)
        .bind(&block.updated_at)
        .execute(&self.pool)
        .await?;

        let row = sqlx::query(
            "SELECT id, key, locale, title, body, updated_at
             FROM content_blocks WHERE key = ? AND locale = ?",
        )
        .bind(&block.key)
        .bind(block.locale.as_str())
        .fetch_one(&self.pool)
        .await?;

        content_from_row(&row)
    }

    async fn delete_content(&self, id: &str) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM content_blocks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

use crate::domain::entities::{AnalyticsEvent, DailyCount, PathCount};
use crate::domain::ports::analytics_repository::AnalyticsRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::Row;

#[async_trait]
impl AnalyticsRepository for Database {
    async fn record_event(&self, event: &AnalyticsEvent) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO analytics_events (id, event_type, path, locale, referrer, session_id, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&event.id)
        .bind(event.event_type.as_str())
        .bind(&event.path)
        .bind(&event.locale)
        .bind(&event.referrer)
        .bind(&event.session_id)
        .bind(&event.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_events_since(&self, since: &str) -> ApiResult<Vec<AnalyticsEvent>> {
        let rows = sqlx::query(
            "SELECT id, event_type, path, locale, referrer, session_id, created_at
             FROM analytics_events
             WHERE created_at >= ?
             ORDER BY created_at DESC",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> ApiResult<AnalyticsEvent> {
                let event_type: String = row.try_get("event_type")?;
                Ok(AnalyticsEvent {
                    id: row.try_get("id")?,
                    event_type: event_type.parse().map_err(ApiError::Internal)?,
                    path: row.try_get("path")?,
                    locale: row.try_get("locale")?,
                    referrer: row.try_get("referrer")?,
                    session_id: row.try_get("session_id")?,
                    created_at: row.try_get("created_at")?,
                })
            })
            .collect()
    }

    async fn count_by_type_since(&self, since: &str) -> ApiResult<Vec<(String, i64)>> {
        let rows = sqlx::query(
            "SELECT event_type, COUNT(*) AS count
             FROM analytics_events
             WHERE created_at >= ?
             GROUP BY event_type
             ORDER BY event_type ASC",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> ApiResult<(String, i64)> {
                Ok((row.try_get("event_type")?, row.try_get("count")?))
            })
            .collect()
    }

    async fn count_by_day_since(&self, since: &str) -> ApiResult<Vec<DailyCount>> {
        let rows = sqlx::query(
            "SELECT substr(created_at, 1, 10) AS day, COUNT(*) AS count
             FROM analytics_events
             WHERE created_at >= ?
             GROUP BY day
             ORDER BY day ASC",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> ApiResult<DailyCount> {
                Ok(DailyCount {
                    date: row.try_get("day")?,
                    count: row.try_get("count")?,
                })
            })
            .collect()
    }

    async fn top_paths_since(&self, since: &str, limit: i64) -> ApiResult<Vec<PathCount>> {
        let rows = sqlx::query(
            "SELECT path, COUNT(*) AS count
             FROM analytics_events
             WHERE created_at >= ? AND event_type = 'page_view' AND path IS NOT NULL
             GROUP BY path
             ORDER BY count DESC, path ASC
             LIMIT ?",
        )
        .bind(since)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> ApiResult<PathCount> {
                Ok(PathCount {
                    path: row.try_get("path")?,
                    count: row.try_get("count")?,
                })
            })
            .collect()
    }
}

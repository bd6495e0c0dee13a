use crate::domain::entities::{BlockedDate, DayTemplate};
use crate::domain::ports::availability_repository::AvailabilityRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::{any::AnyRow, Row};

fn template_from_row(row: &AnyRow) -> ApiResult<DayTemplate> {
    let time_slots: String = row.try_get("time_slots")?;
    let is_active: i64 = row.try_get("is_active")?;

    Ok(DayTemplate {
        day_of_week: row.try_get("day_of_week")?,
        time_slots: serde_json::from_str(&time_slots)?,
        is_active: is_active != 0,
    })
}

fn blocked_date_from_row(row: &AnyRow) -> ApiResult<BlockedDate> {
    let blocked_times: String = row.try_get("blocked_times")?;

    Ok(BlockedDate {
        id: row.try_get("id")?,
        date: row.try_get("date")?,
        blocked_times: serde_json::from_str(&blocked_times)?,
        reason: row.try_get("reason")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl AvailabilityRepository for Database {
    async fn list_templates(&self) -> ApiResult<Vec<DayTemplate>> {
        let rows = sqlx::query(
            "SELECT day_of_week, time_slots, is_active
             FROM availability_templates
             ORDER BY day_of_week ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(template_from_row).collect()
    }

    async fn upsert_template(&self, template: &DayTemplate) -> ApiResult<()> {
        let now = chrono::Utc::now().to_rfc3339();
        let time_slots = serde_json::to_string(&template.time_slots)?;

        sqlx::query(
            "INSERT INTO availability_templates (day_of_week, time_slots, is_active, updated_at)
             VALUES (?, ?, ?, ?)
             ON CONFLICT(day_of_week) DO UPDATE SET
                 time_slots = excluded.time_slots,
                 is_active = excluded.is_active,
                 updated_at = excluded.updated_at",
        )
        .bind(template.day_of_week)
        .bind(&time_slots)
        .bind(if template.is_active { 1_i64 } else { 0_i64 })
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_blocked_dates_between(
        &self,
        start: &str,
        end: &str,
    ) -> ApiResult<Vec<BlockedDate>> {
        let rows = sqlx::query(
            "SELECT id, date, blocked_times, reason, created_at
             FROM blocked_dates
             WHERE date >= ? AND date <= ?
             ORDER BY date ASC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(blocked_date_from_row).collect()
    }

    async fn list_blocked_dates_from(&self, from: &str) -> ApiResult<Vec<BlockedDate>> {
        let rows = sqlx::query(
            "SELECT id, date, blocked_times, reason, created_at
             FROM blocked_dates
             WHERE date >= ?
             ORDER BY date ASC",
        )
        .bind(from)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(blocked_date_from_row).collect()
    }

    async fn upsert_blocked_date(&self, blocked: &BlockedDate) -> ApiResult<BlockedDate> {
        let blocked_times = serde_json::to_string(&blocked.blocked_times)?;

        sqlx::query(
            "INSERT INTO blocked_dates (id, date, blocked_times, reason, created_at)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(date) DO UPDATE SET
                 blocked_times = excluded.blocked_times,
                 reason = excluded.reason",
        )
        .bind(&blocked.id)
        .bind(&blocked.date)
        .bind(&blocked_times)
        .bind(&blocked.reason)
        .bind(&blocked.created_at)
        .execute(&self.pool)
        .await?;

        // The stored row keeps its original id when the date already existed
        let row = sqlx::query(
            "SELECT id, date, blocked_times, reason, created_at FROM blocked_dates WHERE date = ?",
        )
        .bind(&blocked.date)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("Blocked date {} vanished", blocked.date)))?;

        blocked_date_from_row(&row)
    }

    async fn delete_blocked_date(&self, id_or_date: &str) -> ApiResult<u64> {
        let result = sqlx::query("DELETE FROM blocked_dates WHERE id = ? OR date = ?")
            .bind(id_or_date)
            .bind(id_or_date)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

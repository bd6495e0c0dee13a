use crate::domain::entities::{BlockedDate, DayTemplate};
use crate::infrastructure::http::middleware::error::ApiResult;

/// Weekly templates and per-date overrides
#[async_trait::async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Persisted templates only; days never saved are absent
    async fn list_templates(&self) -> ApiResult<Vec<DayTemplate>>;

    /// Insert or replace the template of one day
    async fn upsert_template(&self, template: &DayTemplate) -> ApiResult<()>;

    /// Blocked dates with `start <= date <= end`
    async fn list_blocked_dates_between(&self, start: &str, end: &str)
        -> ApiResult<Vec<BlockedDate>>;

    /// Blocked dates on or after `from`, ascending
    async fn list_blocked_dates_from(&self, from: &str) -> ApiResult<Vec<BlockedDate>>;

    /// Insert, or replace the entry already stored for the same date
    async fn upsert_blocked_date(&self, blocked: &BlockedDate) -> ApiResult<BlockedDate>;

    /// Delete by id or by date; returns the number of rows removed
    async fn delete_blocked_date(&self, id_or_date: &str) -> ApiResult<u64>;
}

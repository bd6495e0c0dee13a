use crate::domain::entities::{AnalyticsEvent, DailyCount, PathCount};
use crate::infrastructure::http::middleware::error::ApiResult;

#[async_trait::async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn record_event(&self, event: &AnalyticsEvent) -> ApiResult<()>;

    /// Events created at or after `since` (RFC 3339), newest first
    async fn list_events_since(&self, since: &str) -> ApiResult<Vec<AnalyticsEvent>>;

    async fn count_by_type_since(&self, since: &str) -> ApiResult<Vec<(String, i64)>>;

    async fn count_by_day_since(&self, since: &str) -> ApiResult<Vec<DailyCount>>;

    async fn top_paths_since(&self, since: &str, limit: i64) -> ApiResult<Vec<PathCount>>;
}

use crate::domain::entities::{
    AnalyticsEvent, AnalyticsEventType, AnalyticsSummary, DashboardStats, TrackEventRequest,
    DATE_FORMAT,
};
use crate::domain::ports::analytics_repository::AnalyticsRepository;
use crate::domain::ports::appointment_repository::AppointmentRepository;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::quote_repository::QuoteRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::shared::utils::optional_text;
use std::sync::Arc;

const MAX_SUMMARY_DAYS: i64 = 365;
const TOP_PATHS_LIMIT: i64 = 10;

#[derive(Clone)]
pub struct AnalyticsService {
    analytics_repo: Arc<dyn AnalyticsRepository>,
    quote_repo: Arc<dyn QuoteRepository>,
    appointment_repo: Arc<dyn AppointmentRepository>,
    clock: Arc<dyn Clock>,
}

impl AnalyticsService {
    pub fn new(
        analytics_repo: Arc<dyn AnalyticsRepository>,
        quote_repo: Arc<dyn QuoteRepository>,
        appointment_repo: Arc<dyn AppointmentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            analytics_repo,
            quote_repo,
            appointment_repo,
            clock,
        }
    }

    /// Public tracking endpoint
    pub async fn track(&self, request: TrackEventRequest) -> ApiResult<()> {
        let mut event = AnalyticsEvent::new(request.event_type);
        event.path = optional_text(request.path.as_deref());
        event.locale = optional_text(request.locale.as_deref());
        event.referrer = optional_text(request.referrer.as_deref());
        event.session_id = optional_text(request.session_id.as_deref());

        self.analytics_repo.record_event(&event).await
    }

    /// Record a server-side event; a failure never fails the caller
    pub async fn record_best_effort(&self, event_type: AnalyticsEventType, locale: Option<String>) {
        let mut event = AnalyticsEvent::new(event_type);
        event.locale = locale;

        if let Err(e) = self.analytics_repo.record_event(&event).await {
            tracing::warn!("Failed to record {} event: {}", event_type.as_str(), e);
        }
    }

    pub async fn summary(&self, days: i64) -> ApiResult<AnalyticsSummary> {
        if !(1..=MAX_SUMMARY_DAYS).contains(&days) {
            return Err(ApiError::BadRequest(format!(
                "days must be between 1 and {}",
                MAX_SUMMARY_DAYS
            )));
        }

        let since = (chrono::Utc::now() - chrono::Duration::days(days)).to_rfc3339();

        let by_type: std::collections::BTreeMap<String, i64> = self
            .analytics_repo
            .count_by_type_since(&since)
            .await?
            .into_iter()
            .collect();
        let by_day = self.analytics_repo.count_by_day_since(&since).await?;
        let top_paths = self
            .analytics_repo
            .top_paths_since(&since, TOP_PATHS_LIMIT)
            .await?;

        Ok(AnalyticsSummary {
            total_events: by_type.values().sum(),
            since,
            by_type,
            by_day,
            top_paths,
        })
    }

    pub async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        let today = self.clock.today().format(DATE_FORMAT).to_string();

        let quotes_by_status = self
            .quote_repo
            .count_by_status()
            .await?
            .into_iter()
            .map(|(status, count)| (status.to_string(), count))
            .collect();
        let appointments_by_status = self
            .appointment_repo
            .count_by_status()
            .await?
            .into_iter()
            .map(|(status, count)| (status.to_string(), count))
            .collect();
        let upcoming_appointments = self.appointment_repo.count_upcoming(&today).await?;

        Ok(DashboardStats {
            quotes_by_status,
            appointments_by_status,
            upcoming_appointments,
        })
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsEventType {
    PageView,
    QuoteSubmitted,
    AppointmentBooked,
    CtaClick,
    Custom,
}

impl AnalyticsEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsEventType::PageView => "page_view",
            AnalyticsEventType::QuoteSubmitted => "quote_submitted",
            AnalyticsEventType::AppointmentBooked => "appointment_booked",
            AnalyticsEventType::CtaClick => "cta_click",
            AnalyticsEventType::Custom => "custom",
        }
    }
}

impl std::str::FromStr for AnalyticsEventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page_view" => Ok(AnalyticsEventType::PageView),
            "quote_submitted" => Ok(AnalyticsEventType::QuoteSubmitted),
            "appointment_booked" => Ok(AnalyticsEventType::AppointmentBooked),
            "cta_click" => Ok(AnalyticsEventType::CtaClick),
            "custom" => Ok(AnalyticsEventType::Custom),
            _ => Err(format!("Invalid analytics event type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub id: String,
    pub event_type: AnalyticsEventType,
    pub path: Option<String>,
    pub locale: Option<String>,
    pub referrer: Option<String>,
    pub session_id: Option<String>,
    pub created_at: String,
}

impl AnalyticsEvent {
    pub fn new(event_type: AnalyticsEventType) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            event_type,
            path: None,
            locale: None,
            referrer: None,
            session_id: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackEventRequest {
    pub event_type: AnalyticsEventType,
    pub path: Option<String>,
    pub locale: Option<String>,
    pub referrer: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    #[serde(default = "default_days")]
    pub days: i64,
}

fn default_days() -> i64 {
    30
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathCount {
    pub path: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub since: String,
    pub total_events: i64,
    pub by_type: BTreeMap<String, i64>,
    pub by_day: Vec<DailyCount>,
    pub top_paths: Vec<PathCount>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub quotes_by_status: BTreeMap<String, i64>,
    pub appointments_by_status: BTreeMap<String, i64>,
    pub upcoming_appointments: i64,
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date format used for every calendar day crossing the API or the database
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Slots offered Monday to Friday when no template has been saved
pub const DEFAULT_WEEKDAY_SLOTS: [&str; 7] =
    ["09:00", "10:00", "11:00", "13:00", "14:00", "15:00", "16:00"];

/// Recurring slot pattern for one day of the week (0 = Sunday)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTemplate {
    pub day_of_week: i64,
    pub time_slots: Vec<String>,
    pub is_active: bool,
}

impl DayTemplate {
    pub fn new(day_of_week: i64, time_slots: Vec<String>, is_active: bool) -> Self {
        Self {
            day_of_week,
            time_slots,
            is_active,
        }
    }

    /// Built-in template for a day: business hours on weekdays, closed at the weekend
    pub fn default_for(day_of_week: i64) -> Self {
        match day_of_week {
            1..=5 => Self::new(
                day_of_week,
                DEFAULT_WEEKDAY_SLOTS.iter().map(|s| s.to_string()).collect(),
                true,
            ),
            _ => Self::new(day_of_week, Vec::new(), false),
        }
    }

    pub fn default_week() -> Vec<Self> {
        (0..7).map(Self::default_for).collect()
    }

    /// Merge persisted templates over the built-in week, one entry per day
    pub fn merged_week(persisted: &[DayTemplate]) -> Vec<Self> {
        (0..7)
            .map(|day| {
                persisted
                    .iter()
                    .find(|t| t.day_of_week == day)
                    .cloned()
                    .unwrap_or_else(|| Self::default_for(day))
            })
            .collect()
    }
}

/// Date-specific override removing some or all slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedDate {
    pub id: String,
    pub date: String,
    pub blocked_times: Vec<String>,
    pub reason: Option<String>,
    pub created_at: String,
}

impl BlockedDate {
    pub fn new(date: String, blocked_times: Vec<String>, reason: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            blocked_times,
            reason,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// An entry without explicit times closes the whole day
    pub fn blocks_whole_day(&self) -> bool {
        self.blocked_times.is_empty()
    }
}

/// A slot held by an appointment that is not cancelled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedSlot {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    pub available: Vec<String>,
    pub booked: Vec<String>,
    pub is_open: bool,
}

/// Query for GET /api/availability
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub month: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub availability: BTreeMap<String, DayAvailability>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAvailabilityResponse {
    pub templates: Vec<DayTemplate>,
    pub blocked_dates: Vec<BlockedDate>,
}

/// Raw template as sent by the admin screen; validated by the service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTemplateInput {
    pub day_of_week: serde_json::Value,
    pub time_slots: serde_json::Value,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct UpdateTemplatesRequest {
    pub templates: Vec<DayTemplateInput>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlockedDateRequest {
    pub date: String,
    #[serde(default)]
    pub blocked_times: Vec<String>,
    pub reason: Option<String>,
}

use crate::domain::entities::{
    AdminAvailabilityResponse, AvailabilityQuery, AvailabilityResponse, BlockedDate,
    CreateBlockedDateRequest, DayAvailability, DayTemplate, DayTemplateInput,
    UpdateTemplatesRequest, DATE_FORMAT,
};
use crate::domain::ports::appointment_repository::AppointmentRepository;
use crate::domain::ports::availability_repository::AvailabilityRepository;
use crate::domain::ports::clock::Clock;
use crate::domain::services::availability_calculator::{
    compute_availability, parse_date, resolve_range, DateRange,
};
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::shared::utils::{is_valid_date, is_valid_slot, optional_text};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct AvailabilityService {
    availability_repo: Arc<dyn AvailabilityRepository>,
    appointment_repo: Arc<dyn AppointmentRepository>,
    clock: Arc<dyn Clock>,
}

impl AvailabilityService {
    pub fn new(
        availability_repo: Arc<dyn AvailabilityRepository>,
        appointment_repo: Arc<dyn AppointmentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            availability_repo,
            appointment_repo,
            clock,
        }
    }

    /// Public calendar for a month, an explicit range or the next three months
    pub async fn get_availability(
        &self,
        query: &AvailabilityQuery,
    ) -> ApiResult<AvailabilityResponse> {
        let now = self.clock.now();
        let range = resolve_range(query, now.date())?;

        Ok(AvailabilityResponse {
            availability: self.compute(range, now).await?,
        })
    }

    /// Whether `time` is still offered on `date` right now
    pub async fn is_slot_available(&self, date: NaiveDate, time: &str) -> ApiResult<bool> {
        let days = self.compute(DateRange::single(date), self.clock.now()).await?;

        Ok(days
            .values()
            .next()
            .map(|day| day.available.iter().any(|slot| slot == time))
            .unwrap_or(false))
    }

    async fn compute(
        &self,
        range: DateRange,
        now: NaiveDateTime,
    ) -> ApiResult<BTreeMap<String, DayAvailability>> {
        let start = range.start_key();
        let end = range.end_key();

        let templates = self.availability_repo.list_templates().await?;
        let blocked = self
            .availability_repo
            .list_blocked_dates_between(&start, &end)
            .await?;
        let booked = self.appointment_repo.list_booked_slots(&start, &end).await?;

        Ok(compute_availability(range, &templates, &blocked, &booked, now))
    }

    /// Week merged with the built-in defaults, plus blocked dates from today on
    pub async fn get_admin_availability(&self) -> ApiResult<AdminAvailabilityResponse> {
        let today = self.clock.today().format(DATE_FORMAT).to_string();

        let persisted = self.availability_repo.list_templates().await?;
        let blocked_dates = self.availability_repo.list_blocked_dates_from(&today).await?;

        Ok(AdminAvailabilityResponse {
            templates: DayTemplate::merged_week(&persisted),
            blocked_dates,
        })
    }

    /// Validate every template first, then upsert each day on its own.
    /// Returns the merged week after the update.
    pub async fn update_templates(
        &self,
        request: UpdateTemplatesRequest,
    ) -> ApiResult<Vec<DayTemplate>> {
        let templates = request
            .templates
            .iter()
            .map(validate_template)
            .collect::<ApiResult<Vec<_>>>()?;

        for template in &templates {
            self.availability_repo.upsert_template(template).await?;
        }

        tracing::info!("Updated {} availability templates", templates.len());

        let persisted = self.availability_repo.list_templates().await?;
        Ok(DayTemplate::merged_week(&persisted))
    }

    pub async fn add_blocked_date(
        &self,
        request: CreateBlockedDateRequest,
    ) -> ApiResult<BlockedDate> {
        let date = request.date.trim().to_string();
        if !is_valid_date(&date) {
            return Err(ApiError::BadRequest(format!(
                "Invalid date '{}', expected YYYY-MM-DD",
                request.date
            )));
        }

        if let Some(bad) = request.blocked_times.iter().find(|t| !is_valid_slot(t)) {
            return Err(ApiError::BadRequest(format!(
                "Invalid time slot '{}', expected HH:MM",
                bad
            )));
        }

        let blocked = BlockedDate::new(
            date,
            request.blocked_times,
            optional_text(request.reason.as_deref()),
        );
        let stored = self.availability_repo.upsert_blocked_date(&blocked).await?;

        tracing::info!(
            "Blocked date saved: date={}, whole_day={}",
            stored.date,
            stored.blocks_whole_day()
        );

        Ok(stored)
    }

    /// `key` is either the entry id or its date
    pub async fn remove_blocked_date(&self, key: &str) -> ApiResult<()> {
        let removed = self.availability_repo.delete_blocked_date(key).await?;
        if removed == 0 {
            return Err(ApiError::NotFound(format!("Blocked date {} not found", key)));
        }
        Ok(())
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn parse_day(&self, value: &str) -> ApiResult<NaiveDate> {
        Ok(parse_date(value)?)
    }
}

fn validate_template(input: &DayTemplateInput) -> ApiResult<DayTemplate> {
    let day_of_week = input
        .day_of_week
        .as_i64()
        .filter(|d| (0..=6).contains(d))
        .ok_or_else(|| {
            ApiError::BadRequest(format!(
                "dayOfWeek must be an integer between 0 and 6, got {}",
                input.day_of_week
            ))
        })?;

    let raw_slots = input.time_slots.as_array().ok_or_else(|| {
        ApiError::BadRequest(format!("timeSlots for day {} must be an array", day_of_week))
    })?;

    let mut time_slots = Vec::with_capacity(raw_slots.len());
    for raw in raw_slots {
        match raw.as_str() {
            Some(slot) if is_valid_slot(slot) => time_slots.push(slot.to_string()),
            _ => {
                return Err(ApiError::BadRequest(format!(
                    "Invalid time slot {} for day {}, expected HH:MM",
                    raw, day_of_week
                )))
            }
        }
    }

    Ok(DayTemplate::new(day_of_week, time_slots, input.is_active))
}

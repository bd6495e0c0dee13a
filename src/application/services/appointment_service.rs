use crate::application::services::{AnalyticsService, AvailabilityService, NotificationService};
use crate::domain::entities::{
    AnalyticsEventType, Appointment, AppointmentFilter, AppointmentStatus,
    CreateAppointmentRequest, Locale, NewAppointment, SubmissionResponse,
    UpdateAppointmentRequest,
};
use crate::domain::errors::DomainError;
use crate::domain::ports::appointment_repository::AppointmentRepository;
use crate::domain::services::appointment_lifecycle::{can_reschedule, validate_transition};
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::observability::APPOINTMENTS_CREATED;
use crate::shared::utils::{
    is_valid_date, is_valid_slot, optional_text, validate_and_normalize_email, RequiredFields,
};
use chrono::Datelike;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppointmentService {
    appointment_repo: Arc<dyn AppointmentRepository>,
    availability_service: AvailabilityService,
    analytics_service: AnalyticsService,
    notification_service: NotificationService,
}

impl AppointmentService {
    pub fn new(
        appointment_repo: Arc<dyn AppointmentRepository>,
        availability_service: AvailabilityService,
        analytics_service: AnalyticsService,
        notification_service: NotificationService,
    ) -> Self {
        Self {
            appointment_repo,
            availability_service,
            analytics_service,
            notification_service,
        }
    }

    /// Public booking: validate, check the slot, store with a fresh
    /// reference number, then notify in the background
    pub async fn submit(&self, request: CreateAppointmentRequest) -> ApiResult<SubmissionResponse> {
        let mut fields = RequiredFields::new();
        let name = fields.take("name", request.name.as_deref());
        let email = fields.take("email", request.email.as_deref());
        let phone = fields.take("phone", request.phone.as_deref());
        let gemeente = fields.take("gemeente", request.gemeente.as_deref());
        let selected_date = fields.take("selectedDate", request.selected_date.as_deref());
        let selected_time = fields.take("selectedTime", request.selected_time.as_deref());
        fields.finish()?;

        let email = validate_and_normalize_email(&email)?;
        if !is_valid_date(&selected_date) {
            return Err(ApiError::BadRequest(format!(
                "Invalid selectedDate '{}', expected YYYY-MM-DD",
                selected_date
            )));
        }
        if !is_valid_slot(&selected_time) {
            return Err(ApiError::BadRequest(format!(
                "Invalid selectedTime '{}', expected HH:MM",
                selected_time
            )));
        }

        let date = self.availability_service.parse_day(&selected_date)?;
        if !self
            .availability_service
            .is_slot_available(date, &selected_time)
            .await?
        {
            return Err(ApiError::Conflict(
                "The selected time slot is no longer available".to_string(),
            ));
        }

        let locale = request
            .locale
            .as_deref()
            .and_then(|l| l.parse::<Locale>().ok())
            .unwrap_or_default();

        let new_appointment = NewAppointment {
            id: uuid::Uuid::new_v4().to_string(),
            appointment_date: selected_date,
            appointment_time: selected_time,
            name,
            email,
            phone,
            gemeente,
            address: optional_text(request.address.as_deref()),
            postal_code: optional_text(request.postal_code.as_deref()),
            project_type: optional_text(request.project_type.as_deref()),
            description: optional_text(request.description.as_deref()),
            preferred_contact: optional_text(request.preferred_contact.as_deref()),
            locale: locale.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        let year = self.availability_service.today().year();
        let appointment = self
            .appointment_repo
            .create_appointment(&new_appointment, year)
            .await?;

        metrics::counter!(APPOINTMENTS_CREATED).increment(1);

        self.analytics_service
            .record_best_effort(AnalyticsEventType::AppointmentBooked, Some(locale.to_string()))
            .await;
        self.notification_service.appointment_booked(&appointment);

        Ok(SubmissionResponse {
            success: true,
            reference_number: appointment.reference_number,
            id: appointment.id,
        })
    }

    pub async fn list(&self, filter: &AppointmentFilter) -> ApiResult<Vec<Appointment>> {
        for bound in [&filter.from, &filter.to].into_iter().flatten() {
            if !is_valid_date(bound) {
                return Err(ApiError::BadRequest(format!(
                    "Invalid date filter '{}', expected YYYY-MM-DD",
                    bound
                )));
            }
        }

        self.appointment_repo.list_appointments(filter).await
    }

    pub async fn get(&self, id: &str) -> ApiResult<Appointment> {
        self.appointment_repo
            .get_appointment(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Appointment {} not found", id)))
    }

    /// Admin edit: status transition, move to another slot, notes.
    ///
    /// Moving an appointment without an explicit status marks it RESCHEDULED.
    pub async fn update(
        &self,
        id: &str,
        request: UpdateAppointmentRequest,
    ) -> ApiResult<Appointment> {
        let mut appointment = self.get(id).await?;
        let current = appointment.status;

        if let Some(status) = request.status {
            validate_transition(current, status).map_err(DomainError::from)?;
        }

        let new_date = match request.appointment_date.as_deref().map(str::trim) {
            Some(date) if !is_valid_date(date) => {
                return Err(ApiError::BadRequest(format!(
                    "Invalid appointmentDate '{}', expected YYYY-MM-DD",
                    date
                )))
            }
            Some(date) => date.to_string(),
            None => appointment.appointment_date.clone(),
        };
        let new_time = match request.appointment_time.as_deref().map(str::trim) {
            Some(time) if !is_valid_slot(time) => {
                return Err(ApiError::BadRequest(format!(
                    "Invalid appointmentTime '{}', expected HH:MM",
                    time
                )))
            }
            Some(time) => time.to_string(),
            None => appointment.appointment_time.clone(),
        };

        let moved =
            new_date != appointment.appointment_date || new_time != appointment.appointment_time;
        let mut status = request.status.unwrap_or(current);

        if moved {
            if !can_reschedule(current) {
                return Err(ApiError::Conflict(format!(
                    "A {} appointment cannot be moved",
                    current
                )));
            }
            if self
                .appointment_repo
                .is_slot_taken(&new_date, &new_time, Some(&appointment.id))
                .await?
            {
                return Err(ApiError::Conflict(
                    "This time slot is already booked".to_string(),
                ));
            }
            if request.status.is_none() {
                status = AppointmentStatus::Rescheduled;
            }
        } else if status == AppointmentStatus::Rescheduled && current != AppointmentStatus::Rescheduled {
            return Err(ApiError::BadRequest(
                "Rescheduling requires a new appointmentDate or appointmentTime".to_string(),
            ));
        }

        appointment.appointment_date = new_date;
        appointment.appointment_time = new_time;
        appointment.status = status;
        if let Some(notes) = request.admin_notes {
            appointment.admin_notes = optional_text(Some(&notes));
        }
        appointment.updated_at = chrono::Utc::now().to_rfc3339();

        self.appointment_repo.update_appointment(&appointment).await?;

        tracing::info!(
            "Appointment {} updated: status {} -> {}, slot {} {}",
            appointment.reference_number,
            current,
            appointment.status,
            appointment.appointment_date,
            appointment.appointment_time
        );

        Ok(appointment)
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        if !self.appointment_repo.delete_appointment(id).await? {
            return Err(ApiError::NotFound(format!("Appointment {} not found", id)));
        }
        tracing::info!("Appointment {} deleted", id);
        Ok(())
    }
}

use crate::domain::entities::{
    Appointment, AppointmentFilter, AppointmentStatus, BookedSlot, NewAppointment,
};
use crate::infrastructure::http::middleware::error::ApiResult;

#[async_trait::async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Allocate the next reference number for `year` and insert the
    /// appointment in one transaction
    async fn create_appointment(
        &self,
        appointment: &NewAppointment,
        year: i32,
    ) -> ApiResult<Appointment>;

    async fn get_appointment(&self, id: &str) -> ApiResult<Option<Appointment>>;

    async fn list_appointments(&self, filter: &AppointmentFilter) -> ApiResult<Vec<Appointment>>;

    /// Slots held by appointments that are not cancelled, `start <= date <= end`
    async fn list_booked_slots(&self, start: &str, end: &str) -> ApiResult<Vec<BookedSlot>>;

    /// Whether a live appointment other than `exclude_id` holds the slot
    async fn is_slot_taken(
        &self,
        date: &str,
        time: &str,
        exclude_id: Option<&str>,
    ) -> ApiResult<bool>;

    async fn update_appointment(&self, appointment: &Appointment) -> ApiResult<()>;

    /// Returns false when nothing was deleted
    async fn delete_appointment(&self, id: &str) -> ApiResult<bool>;

    async fn count_by_status(&self) -> ApiResult<Vec<(AppointmentStatus, i64)>>;

    /// Live appointments from `from` onwards (pending, confirmed or rescheduled)
    async fn count_upcoming(&self, from: &str) -> ApiResult<i64>;
}

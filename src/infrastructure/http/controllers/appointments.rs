use crate::domain::entities::{CreateAppointmentRequest, SubmissionResponse};
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{extract::State, http::StatusCode, Json};

/// POST /api/appointments - Public booking form
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(request): Json<CreateAppointmentRequest>,
) -> ApiResult<(StatusCode, Json<SubmissionResponse>)> {
    let response = state.appointment_service.submit(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

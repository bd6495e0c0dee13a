use crate::domain::entities::{Appointment, AppointmentFilter, UpdateAppointmentRequest};
use crate::infrastructure::http::controllers::cached;
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

/// GET /api/admin/appointments?status=&from=&to=
pub async fn list_appointments(
    State(state): State<AppState>,
    Query(filter): Query<AppointmentFilter>,
) -> ApiResult<Json<serde_json::Value>> {
    let key = format!("appointments:{:?}", filter);
    let service = state.appointment_service.clone();
    cached(&state.admin_cache, key, async move {
        service.list(&filter).await
    })
    .await
}

pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Appointment>> {
    Ok(Json(state.appointment_service.get(&id).await?))
}

/// PATCH /api/admin/appointments/:id
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> ApiResult<Json<Appointment>> {
    Ok(Json(state.appointment_service.update(&id, request).await?))
}

pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.appointment_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

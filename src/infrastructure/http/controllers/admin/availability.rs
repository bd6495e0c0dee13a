use crate::domain::entities::{
    AdminAvailabilityResponse, BlockedDate, CreateBlockedDateRequest, DayTemplate,
    UpdateTemplatesRequest,
};
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// GET /api/admin/availability - Templates and upcoming blocked dates
pub async fn get_availability(
    State(state): State<AppState>,
) -> ApiResult<Json<AdminAvailabilityResponse>> {
    Ok(Json(
        state.availability_service.get_admin_availability().await?,
    ))
}

/// PUT /api/admin/availability
pub async fn update_templates(
    State(state): State<AppState>,
    Json(request): Json<UpdateTemplatesRequest>,
) -> ApiResult<Json<Vec<DayTemplate>>> {
    Ok(Json(
        state.availability_service.update_templates(request).await?,
    ))
}

/// POST /api/admin/availability/blocked-dates
pub async fn create_blocked_date(
    State(state): State<AppState>,
    Json(request): Json<CreateBlockedDateRequest>,
) -> ApiResult<(StatusCode, Json<BlockedDate>)> {
    let blocked = state.availability_service.add_blocked_date(request).await?;
    Ok((StatusCode::CREATED, Json(blocked)))
}

/// DELETE /api/admin/availability/blocked-dates/:key - key is an id or a date
pub async fn delete_blocked_date(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<StatusCode> {
    state.availability_service.remove_blocked_date(&key).await?;
    Ok(StatusCode::NO_CONTENT)
}

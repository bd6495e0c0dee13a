use crate::domain::entities::TrackEventRequest;
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{extract::State, http::StatusCode, Json};

/// POST /api/analytics/events
pub async fn track_event(
    State(state): State<AppState>,
    Json(request): Json<TrackEventRequest>,
) -> ApiResult<StatusCode> {
    state.analytics_service.track(request).await?;
    Ok(StatusCode::NO_CONTENT)
}

use crate::domain::entities::{AvailabilityQuery, AvailabilityResponse};
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{
    extract::{Query, State},
    Json,
};

/// GET /api/availability?month=YYYY-MM | startDate&endDate
pub async fn get_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> ApiResult<Json<AvailabilityResponse>> {
    let response = state.availability_service.get_availability(&query).await?;
    Ok(Json(response))
}

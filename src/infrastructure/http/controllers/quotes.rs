use crate::domain::entities::{CreateQuoteRequest, SubmissionResponse};
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{extract::State, http::StatusCode, Json};

/// POST /api/quotes - Public quote request
pub async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<CreateQuoteRequest>,
) -> ApiResult<(StatusCode, Json<SubmissionResponse>)> {
    let response = state.quote_service.submit(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

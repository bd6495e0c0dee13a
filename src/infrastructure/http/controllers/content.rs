use crate::domain::entities::{ContentBlock, Locale};
use crate::infrastructure::http::middleware::{ApiError, ApiResult, AppState};
use axum::{
    extract::{Path, State},
    Json,
};

/// GET /api/content/:locale - Published blocks for one language
pub async fn get_content(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> ApiResult<Json<Vec<ContentBlock>>> {
    let locale: Locale = locale.parse().map_err(ApiError::BadRequest)?;
    let blocks = state.content_service.list(Some(locale)).await?;
    Ok(Json(blocks))
}

use crate::domain::entities::{ContentBlock, ContentQuery, UpsertContentRequest};
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

/// GET /api/admin/content?locale=
pub async fn list_content(
    State(state): State<AppState>,
    Query(query): Query<ContentQuery>,
) -> ApiResult<Json<Vec<ContentBlock>>> {
    Ok(Json(state.content_service.list(query.locale).await?))
}

/// PUT /api/admin/content - Upsert by key and locale
pub async fn upsert_content(
    State(state): State<AppState>,
    Json(request): Json<UpsertContentRequest>,
) -> ApiResult<Json<ContentBlock>> {
    Ok(Json(state.content_service.upsert(request).await?))
}

pub async fn delete_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.content_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

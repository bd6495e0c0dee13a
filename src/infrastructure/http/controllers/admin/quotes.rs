use crate::domain::entities::{Quote, QuoteFilter, UpdateQuoteRequest};
use crate::infrastructure::http::controllers::cached;
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

/// GET /api/admin/quotes?status=
pub async fn list_quotes(
    State(state): State<AppState>,
    Query(filter): Query<QuoteFilter>,
) -> ApiResult<Json<serde_json::Value>> {
    let key = format!("quotes:{:?}", filter);
    let service = state.quote_service.clone();
    cached(&state.admin_cache, key, async move {
        service.list(&filter).await
    })
    .await
}

pub async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Quote>> {
    Ok(Json(state.quote_service.get(&id).await?))
}

pub async fn update_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateQuoteRequest>,
) -> ApiResult<Json<Quote>> {
    Ok(Json(state.quote_service.update(&id, request).await?))
}

pub async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.quote_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

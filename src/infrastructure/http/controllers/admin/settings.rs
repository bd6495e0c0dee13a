use crate::domain::entities::{SettingsResponse, UpdateSettingsRequest};
use crate::infrastructure::http::controllers::cached;
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{extract::State, Json};

pub async fn get_settings(State(state): State<AppState>) -> ApiResult<Json<serde_json::Value>> {
    let service = state.settings_service.clone();
    cached(&state.admin_cache, "settings".to_string(), async move {
        service.list().await
    })
    .await
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> ApiResult<Json<SettingsResponse>> {
    Ok(Json(state.settings_service.update(request).await?))
}

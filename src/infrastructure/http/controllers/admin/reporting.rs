use crate::application::services::ExportType;
use crate::domain::entities::AnalyticsQuery;
use crate::infrastructure::http::controllers::cached;
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

/// GET /api/admin/analytics?days=30
pub async fn get_analytics(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> ApiResult<Json<serde_json::Value>> {
    let key = format!("analytics:{}", query.days);
    let service = state.analytics_service.clone();
    cached(&state.admin_cache, key, async move {
        service.summary(query.days).await
    })
    .await
}

/// GET /api/admin/stats - Dashboard counters
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<serde_json::Value>> {
    let service = state.analytics_service.clone();
    cached(&state.admin_cache, "stats".to_string(), async move {
        service.dashboard_stats().await
    })
    .await
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(rename = "type")]
    pub export_type: Option<String>,
}

/// GET /api/admin/export?type=quotes|appointments|analytics
pub async fn export_csv(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> ApiResult<Response> {
    let export_type: ExportType = query.export_type.as_deref().unwrap_or("").parse()?;
    let export = state.export_service.export(export_type).await?;

    tracing::info!("CSV export generated: {}", export.filename);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.filename),
            ),
        ],
        export.body,
    )
        .into_response())
}

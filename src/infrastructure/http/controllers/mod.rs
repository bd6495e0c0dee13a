pub mod admin;
pub mod analytics;
pub mod appointments;
pub mod availability;
pub mod content;
pub mod quotes;

use crate::infrastructure::cache::AdminCache;
use crate::infrastructure::http::middleware::{ApiError, ApiResult};
use axum::Json;
use serde::Serialize;
use std::future::Future;

/// Serve an admin read through the TTL cache
pub(crate) async fn cached<T, Fut>(
    cache: &AdminCache,
    key: String,
    load: Fut,
) -> ApiResult<Json<serde_json::Value>>
where
    T: Serialize,
    Fut: Future<Output = ApiResult<T>>,
{
    let value = cache
        .get_or_try_insert_with(key, move || async move {
            let loaded = load.await?;
            Ok::<_, ApiError>(serde_json::to_value(loaded)?)
        })
        .await?;

    Ok(Json(value))
}

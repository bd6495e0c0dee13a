use crate::domain::entities::{SettingsResponse, UpdateSettingsRequest};
use crate::domain::ports::settings_repository::SettingsRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use std::sync::Arc;

const MAX_KEY_LEN: usize = 100;

#[derive(Clone)]
pub struct SettingsService {
    settings_repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(settings_repo: Arc<dyn SettingsRepository>) -> Self {
        Self { settings_repo }
    }

    pub async fn list(&self) -> ApiResult<SettingsResponse> {
        let settings = self
            .settings_repo
            .list_settings()
            .await?
            .into_iter()
            .map(|s| (s.key, s.value))
            .collect();

        Ok(SettingsResponse { settings })
    }

    pub async fn get(&self, key: &str) -> ApiResult<Option<serde_json::Value>> {
        Ok(self.settings_repo.get_setting(key).await?.map(|s| s.value))
    }

    /// Upsert every key in the request, then return the full map
    pub async fn update(&self, request: UpdateSettingsRequest) -> ApiResult<SettingsResponse> {
        if let Some(bad) = request
            .settings
            .keys()
            .find(|k| k.trim().is_empty() || k.len() > MAX_KEY_LEN)
        {
            return Err(ApiError::BadRequest(format!("Invalid setting key '{}'", bad)));
        }

        for (key, value) in &request.settings {
            self.settings_repo.set_setting(key.trim(), value).await?;
        }

        tracing::info!("Updated {} settings", request.settings.len());

        self.list().await
    }
}

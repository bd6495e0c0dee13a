use crate::domain::entities::Setting;
use crate::infrastructure::http::middleware::error::ApiResult;

#[async_trait::async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn list_settings(&self) -> ApiResult<Vec<Setting>>;
    async fn get_setting(&self, key: &str) -> ApiResult<Option<Setting>>;
    async fn set_setting(&self, key: &str, value: &serde_json::Value) -> ApiResult<()>;
}

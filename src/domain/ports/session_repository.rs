use crate::domain::entities::AdminSession;
use crate::infrastructure::http::middleware::error::ApiResult;

#[async_trait::async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create_session(&self, session: &AdminSession) -> ApiResult<()>;
    async fn get_session(&self, token_hash: &str) -> ApiResult<Option<AdminSession>>;
    async fn delete_session(&self, token_hash: &str) -> ApiResult<()>;
    async fn cleanup_expired_sessions(&self) -> ApiResult<u64>;
}

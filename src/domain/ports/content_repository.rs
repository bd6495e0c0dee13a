use crate::domain::entities::{ContentBlock, Locale};
use crate::infrastructure::http::middleware::error::ApiResult;

#[async_trait::async_trait]
pub trait ContentRepository: Send + Sync {
    async fn list_content(&self, locale: Option<Locale>) -> ApiResult<Vec<ContentBlock>>;

    /// Insert or replace the block stored under the same key and locale
    async fn upsert_content(&self, block: &ContentBlock) -> ApiResult<ContentBlock>;

    async fn delete_content(&self, id: &str) -> ApiResult<bool>;
}

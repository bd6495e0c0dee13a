use crate::domain::entities::{ContentBlock, Locale, UpsertContentRequest};
use crate::domain::ports::content_repository::ContentRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::shared::utils::optional_text;
use std::sync::Arc;

#[derive(Clone)]
pub struct ContentService {
    content_repo: Arc<dyn ContentRepository>,
}

impl ContentService {
    pub fn new(content_repo: Arc<dyn ContentRepository>) -> Self {
        Self { content_repo }
    }

    pub async fn list(&self, locale: Option<Locale>) -> ApiResult<Vec<ContentBlock>> {
        self.content_repo.list_content(locale).await
    }

    pub async fn upsert(&self, request: UpsertContentRequest) -> ApiResult<ContentBlock> {
        let key = request.key.trim();
        if key.is_empty() {
            return Err(ApiError::BadRequest("Content key is required".to_string()));
        }

        let block = ContentBlock::new(
            key.to_string(),
            request.locale,
            optional_text(request.title.as_deref()),
            request.body,
        );

        self.content_repo.upsert_content(&block).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        if !self.content_repo.delete_content(id).await? {
            return Err(ApiError::NotFound(format!("Content block {} not found", id)));
        }
        Ok(())
    }
}

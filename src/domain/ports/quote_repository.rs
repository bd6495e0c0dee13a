use crate::domain::entities::{NewQuote, Quote, QuoteFilter, QuoteStatus};
use crate::infrastructure::http::middleware::error::ApiResult;

#[async_trait::async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Allocate the next reference number for `year` and insert the quote
    async fn create_quote(&self, quote: &NewQuote, year: i32) -> ApiResult<Quote>;

    async fn get_quote(&self, id: &str) -> ApiResult<Option<Quote>>;

    async fn list_quotes(&self, filter: &QuoteFilter) -> ApiResult<Vec<Quote>>;

    async fn update_quote(&self, quote: &Quote) -> ApiResult<()>;

    async fn delete_quote(&self, id: &str) -> ApiResult<bool>;

    async fn count_by_status(&self) -> ApiResult<Vec<(QuoteStatus, i64)>>;
}

use crate::application::services::{AnalyticsService, NotificationService};
use crate::domain::entities::{
    AnalyticsEventType, CreateQuoteRequest, Locale, NewQuote, Quote, QuoteFilter,
    SubmissionResponse, UpdateQuoteRequest,
};
use crate::domain::ports::clock::Clock;
use crate::domain::ports::quote_repository::QuoteRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::observability::QUOTES_CREATED;
use crate::shared::utils::{optional_text, validate_and_normalize_email, RequiredFields};
use chrono::Datelike;
use std::sync::Arc;

#[derive(Clone)]
pub struct QuoteService {
    quote_repo: Arc<dyn QuoteRepository>,
    analytics_service: AnalyticsService,
    notification_service: NotificationService,
    clock: Arc<dyn Clock>,
}

impl QuoteService {
    pub fn new(
        quote_repo: Arc<dyn QuoteRepository>,
        analytics_service: AnalyticsService,
        notification_service: NotificationService,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            quote_repo,
            analytics_service,
            notification_service,
            clock,
        }
    }

    pub async fn submit(&self, request: CreateQuoteRequest) -> ApiResult<SubmissionResponse> {
        let mut fields = RequiredFields::new();
        let name = fields.take("name", request.name.as_deref());
        let email = fields.take("email", request.email.as_deref());
        let phone = fields.take("phone", request.phone.as_deref());
        let gemeente = fields.take("gemeente", request.gemeente.as_deref());
        let description = fields.take("description", request.description.as_deref());
        fields.finish()?;

        let services: Vec<String> = request
            .services
            .iter()
            .filter_map(|s| optional_text(Some(s)))
            .collect();
        if services.is_empty() {
            return Err(ApiError::BadRequest(
                "Select at least one service".to_string(),
            ));
        }

        let email = validate_and_normalize_email(&email)?;
        let locale = request
            .locale
            .as_deref()
            .and_then(|l| l.parse::<Locale>().ok())
            .unwrap_or_default();

        let new_quote = NewQuote {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            gemeente,
            address: optional_text(request.address.as_deref()),
            services,
            description,
            budget: optional_text(request.budget.as_deref()),
            timeline: optional_text(request.timeline.as_deref()),
            locale: locale.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        let quote = self
            .quote_repo
            .create_quote(&new_quote, self.clock.today().year())
            .await?;

        metrics::counter!(QUOTES_CREATED).increment(1);

        self.analytics_service
            .record_best_effort(AnalyticsEventType::QuoteSubmitted, Some(locale.to_string()))
            .await;
        self.notification_service.quote_received(&quote);

        Ok(SubmissionResponse {
            success: true,
            reference_number: quote.reference_number,
            id: quote.id,
        })
    }

    pub async fn list(&self, filter: &QuoteFilter) -> ApiResult<Vec<Quote>> {
        self.quote_repo.list_quotes(filter).await
    }

    pub async fn get(&self, id: &str) -> ApiResult<Quote> {
        self.quote_repo
            .get_quote(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Quote {} not found", id)))
    }

    /// Quotes move freely between statuses; only notes and status are editable
    pub async fn update(&self, id: &str, request: UpdateQuoteRequest) -> ApiResult<Quote> {
        let mut quote = self.get(id).await?;

        if let Some(status) = request.status {
            quote.status = status;
        }
        if let Some(notes) = request.admin_notes {
            quote.admin_notes = optional_text(Some(&notes));
        }
        quote.updated_at = chrono::Utc::now().to_rfc3339();

        self.quote_repo.update_quote(&quote).await?;
        tracing::info!("Quote {} updated: status={}", quote.reference_number, quote.status);

        Ok(quote)
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        if !self.quote_repo.delete_quote(id).await? {
            return Err(ApiError::NotFound(format!("Quote {} not found", id)));
        }
        tracing::info!("Quote {} deleted", id);
        Ok(())
    }
}

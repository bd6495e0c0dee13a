use crate::application::services::{
    AdminAuthService, AnalyticsService, AppointmentService, AvailabilityService, ContentService,
    ExportService, QuoteService, SettingsService,
};
use crate::domain::entities::{AdminSession, SESSION_COOKIE};
use crate::infrastructure::cache::AdminCache;
use crate::infrastructure::http::middleware::error::ApiError;
use crate::shared::rate_limiter::AuthRateLimiter;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

#[derive(Clone)]
pub struct AppState {
    pub cookie_secure: bool,
    pub availability_service: AvailabilityService,
    pub appointment_service: AppointmentService,
    pub quote_service: QuoteService,
    pub admin_auth_service: AdminAuthService,
    pub settings_service: SettingsService,
    pub content_service: ContentService,
    pub analytics_service: AnalyticsService,
    pub export_service: ExportService,
    pub admin_cache: AdminCache,
    pub rate_limiter: AuthRateLimiter,
}

/// Admin session attached to requests that passed `require_admin`
#[derive(Debug, Clone)]
pub struct AdminContext {
    pub session: AdminSession,
    pub token: String,
}

/// Read the session cookie and validate it against the session store
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let jar = CookieJar::from_headers(request.headers());

    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ApiError::Unauthorized)?;

    let session = state
        .admin_auth_service
        .validate_session(&token)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    request
        .extensions_mut()
        .insert(AdminContext { session, token });

    Ok(next.run(request).await)
}

/// Key used to rate limit login attempts; first hop of X-Forwarded-For when present
pub fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|h| h.to_str().ok())
                .map(|v| v.trim().to_string())
        })
        .unwrap_or_else(|| "anonymous".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_client_key_uses_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        assert_eq!(client_key(&headers), "203.0.113.7");
    }

    #[test]
    fn test_client_key_fallback() {
        assert_eq!(client_key(&HeaderMap::new()), "anonymous");
    }
}

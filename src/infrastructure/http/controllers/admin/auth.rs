use crate::domain::entities::{LoginRequest, SessionResponse, SESSION_COOKIE};
use crate::infrastructure::http::middleware::{
    client_key, AdminContext, ApiError, ApiResult, AppState,
};
use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Extension, Json,
};
use axum_extra::extract::cookie::CookieJar;

fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}{}",
        SESSION_COOKIE,
        token,
        max_age_secs,
        if secure { "; Secure" } else { "" }
    )
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Response> {
    let client = client_key(&headers);

    if let Err(wait) = state.rate_limiter.check(&client).await {
        tracing::warn!("Admin login rate limited for {}", client);
        return Err(ApiError::TooManyRequests(format!(
            "Too many login attempts, try again in {} seconds",
            wait.as_secs().max(1)
        )));
    }

    let (token, session) = state.admin_auth_service.login(&request.password).await?;
    state.rate_limiter.reset(&client).await;

    let cookie = session_cookie(
        &token,
        state.admin_auth_service.session_duration_hours() * 3600,
        state.cookie_secure,
    );

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(SessionResponse {
            authenticated: true,
            expires_at: Some(session.expires_at),
        }),
    )
        .into_response())
}

/// POST /api/admin/logout - Always clears the cookie, even for a stale session
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> ApiResult<Response> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.admin_auth_service.logout(cookie.value()).await?;
    }

    Ok((
        [(header::SET_COOKIE, session_cookie("", 0, state.cookie_secure))],
        Json(SessionResponse {
            authenticated: false,
            expires_at: None,
        }),
    )
        .into_response())
}

/// GET /api/admin/session
pub async fn get_session(Extension(admin): Extension<AdminContext>) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: true,
        expires_at: Some(admin.session.expires_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc", 3600, true);
        assert_eq!(
            cookie,
            "nam_admin_session=abc; Path=/; HttpOnly; SameSite=Lax; Max-Age=3600; Secure"
        );
        assert!(!session_cookie("abc", 3600, false).contains("Secure"));
    }
}

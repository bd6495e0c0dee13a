use crate::domain::entities::AdminSession;
use crate::domain::ports::session_repository::SessionRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::observability::ADMIN_LOGINS_FAILED;
use crate::shared::utils::{generate_session_token, hash_token};
use std::sync::Arc;

/// Single shared admin password, opaque session tokens
#[derive(Clone)]
pub struct AdminAuthService {
    session_repo: Arc<dyn SessionRepository>,
    password_hash: String,
    session_duration_hours: i64,
}

impl AdminAuthService {
    pub fn new(
        session_repo: Arc<dyn SessionRepository>,
        admin_password: &str,
        session_duration_hours: i64,
    ) -> Self {
        Self {
            session_repo,
            password_hash: hash_token(admin_password),
            session_duration_hours,
        }
    }

    pub fn session_duration_hours(&self) -> i64 {
        self.session_duration_hours
    }

    /// Check the password and open a session. Returns the raw token for the
    /// cookie; only its hash is stored.
    pub async fn login(&self, password: &str) -> ApiResult<(String, AdminSession)> {
        if !constant_time_eq(hash_token(password).as_bytes(), self.password_hash.as_bytes()) {
            metrics::counter!(ADMIN_LOGINS_FAILED).increment(1);
            tracing::warn!("Admin login rejected: wrong password");
            return Err(ApiError::Unauthorized);
        }

        let token = generate_session_token();
        let session = AdminSession::new(hash_token(&token), self.session_duration_hours);
        self.session_repo.create_session(&session).await?;

        tracing::info!("Admin session opened, expires at {}", session.expires_at);

        Ok((token, session))
    }

    /// Resolve a cookie token; expired sessions are removed on sight
    pub async fn validate_session(&self, token: &str) -> ApiResult<Option<AdminSession>> {
        let token_hash = hash_token(token);

        let Some(session) = self.session_repo.get_session(&token_hash).await? else {
            return Ok(None);
        };

        if session.is_expired() {
            self.session_repo.delete_session(&token_hash).await?;
            return Ok(None);
        }

        Ok(Some(session))
    }

    pub async fn logout(&self, token: &str) -> ApiResult<()> {
        self.session_repo.delete_session(&hash_token(token)).await
    }

    pub async fn cleanup_expired_sessions(&self) -> ApiResult<u64> {
        self.session_repo.cleanup_expired_sessions().await
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
    }
}

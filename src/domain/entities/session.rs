use serde::{Deserialize, Serialize};

/// Name of the cookie carrying the admin session token
pub const SESSION_COOKIE: &str = "nam_admin_session";

/// Server-side record of an admin login. Only the SHA-256 of the token is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSession {
    pub token_hash: String,
    pub created_at: String,
    pub expires_at: String,
}

impl AdminSession {
    pub fn new(token_hash: String, duration_hours: i64) -> Self {
        let now = chrono::Utc::now();
        let expires_at = now + chrono::Duration::hours(duration_hours);

        Self {
            token_hash,
            created_at: now.to_rfc3339(),
            expires_at: expires_at.to_rfc3339(),
        }
    }

    pub fn is_expired(&self) -> bool {
        match chrono::DateTime::parse_from_rfc3339(&self.expires_at) {
            Ok(expires_at) => expires_at < chrono::Utc::now(),
            // Unreadable expiry is treated as expired
            Err(_) => true,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub authenticated: bool,
    pub expires_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_not_expired() {
        let session = AdminSession::new("hash".to_string(), 12);
        assert!(!session.is_expired());
    }

    #[test]
    fn test_session_in_the_past_is_expired() {
        let session = AdminSession::new("hash".to_string(), -1);
        assert!(session.is_expired());
    }

    #[test]
    fn test_garbage_expiry_is_expired() {
        let mut session = AdminSession::new("hash".to_string(), 12);
        session.expires_at = "not-a-date".to_string();
        assert!(session.is_expired());
    }
}

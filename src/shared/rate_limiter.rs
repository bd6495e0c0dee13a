use governor::{
    clock::{Clock, DefaultClock},
    state::direct::NotKeyed,
    state::InMemoryState,
    Quota, RateLimiter as GovernorRateLimiter,
};
use std::collections::HashMap;
use std::{num::NonZeroU32, sync::Arc, time::Duration};
use tokio::sync::RwLock;

type DirectLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Rate limiter for admin login attempts, keyed by client.
///
/// Every attempt consumes one token; a successful login resets the client.
/// Default: 5 attempts per 15 minutes.
#[derive(Clone)]
pub struct AuthRateLimiter {
    limiters: Arc<RwLock<HashMap<String, Arc<DirectLimiter>>>>,
    max_attempts: u32,
    window_minutes: u64,
}

impl AuthRateLimiter {
    pub fn new() -> Self {
        Self::with_config(5, 15)
    }

    pub fn with_config(max_attempts: u32, window_minutes: u64) -> Self {
        Self {
            limiters: Arc::new(RwLock::new(HashMap::new())),
            max_attempts,
            window_minutes,
        }
    }

    fn quota(&self) -> Quota {
        let burst = NonZeroU32::new(self.max_attempts).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(self.window_minutes.max(1) * 60);

        Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_minute(NonZeroU32::MIN))
            .allow_burst(burst)
    }

    /// Consume one attempt for `client`.
    ///
    /// Returns Err with the time to wait when the client is over its quota.
    pub async fn check(&self, client: &str) -> Result<(), Duration> {
        let limiter = {
            let mut limiters = self.limiters.write().await;
            limiters
                .entry(client.to_string())
                .or_insert_with(|| Arc::new(GovernorRateLimiter::direct(self.quota())))
                .clone()
        };

        match limiter.check() {
            Ok(_) => Ok(()),
            Err(negative) => Err(negative.wait_time_from(DefaultClock::default().now())),
        }
    }

    /// Forget a client, e.g. after a successful login
    pub async fn reset(&self, client: &str) {
        self.limiters.write().await.remove(client);
    }

    /// Drop limiters that have fully recovered
    pub async fn cleanup(&self) {
        let mut limiters = self.limiters.write().await;
        limiters.retain(|_, limiter| limiter.check().is_err());
    }
}

impl Default for AuthRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rate_limiter_allows_within_limit() {
        let limiter = AuthRateLimiter::with_config(3, 1);
        let client = "203.0.113.7";

        assert!(limiter.check(client).await.is_ok());
        assert!(limiter.check(client).await.is_ok());
        assert!(limiter.check(client).await.is_ok());

        // 4th attempt should be rate limited
        assert!(limiter.check(client).await.is_err());
    }

    #[tokio::test]
    async fn test_rate_limiter_resets() {
        let limiter = AuthRateLimiter::with_config(2, 1);
        let client = "203.0.113.7";

        assert!(limiter.check(client).await.is_ok());
        assert!(limiter.check(client).await.is_ok());
        assert!(limiter.check(client).await.is_err());

        limiter.reset(client).await;
        assert!(limiter.check(client).await.is_ok());
    }

    #[tokio::test]
    async fn test_rate_limiter_independent_clients() {
        let limiter = AuthRateLimiter::with_config(1, 1);

        assert!(limiter.check("10.0.0.1").await.is_ok());
        assert!(limiter.check("10.0.0.1").await.is_err());
        assert!(limiter.check("10.0.0.2").await.is_ok());
    }
}

use crate::infrastructure::http::middleware::error::ApiResult;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Default lifetime of a cached admin response
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30);

struct CacheEntry {
    inserted_at: Instant,
    value: serde_json::Value,
}

/// Process-local cache for admin GET responses.
///
/// Entries expire after a fixed TTL and are never invalidated by writes, so
/// admin screens may show data up to one TTL old.
#[derive(Clone)]
pub struct AdminCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

impl AdminCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn get(&self, key: &str) -> Option<serde_json::Value> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.inserted_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone())
    }

    pub async fn insert(&self, key: String, value: serde_json::Value) {
        let mut entries = self.entries.write().await;

        // Drop stale entries while holding the write lock anyway
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.inserted_at.elapsed() < ttl);

        entries.insert(
            key,
            CacheEntry {
                inserted_at: Instant::now(),
                value,
            },
        );
    }

    /// Return the cached value for `key`, or run `load` and cache its result.
    /// Errors are not cached.
    pub async fn get_or_try_insert_with<F, Fut>(
        &self,
        key: String,
        load: F,
    ) -> ApiResult<serde_json::Value>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<serde_json::Value>>,
    {
        if let Some(value) = self.get(&key).await {
            tracing::debug!("Admin cache hit: {}", key);
            return Ok(value);
        }

        let value = load().await?;
        self.insert(key, value.clone()).await;
        Ok(value)
    }

}

impl Default for AdminCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_hit_within_ttl() {
        let cache = AdminCache::new(Duration::from_secs(30));
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_try_insert_with("stats".to_string(), || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(json!({"count": 1}))
                })
                .await
                .unwrap();
            assert_eq!(value, json!({"count": 1}));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_is_reloaded() {
        let cache = AdminCache::new(Duration::from_millis(10));
        cache.insert("k".to_string(), json!(1)).await;
        assert_eq!(cache.get("k").await, Some(json!(1)));

        tokio::time::sleep(Duration::from_millis(25)).await;
        assert_eq!(cache.get("k").await, None);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        use crate::infrastructure::http::middleware::error::ApiError;

        let cache = AdminCache::default();
        let result = cache
            .get_or_try_insert_with("broken".to_string(), || async {
                Err(ApiError::Internal("boom".to_string()))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(cache.get("broken").await, None);
    }
}

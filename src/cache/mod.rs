use moka::future::Cache;
use std::time::Duration;

/// TTLs for the read-through response caches.
pub struct CacheConfig {
    pub list_ttl: Duration,
    pub detail_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            list_ttl: Duration::from_secs(300),   // 5 minutes
            detail_ttl: Duration::from_secs(600), // 10 minutes
        }
    }
}

impl CacheConfig {
    pub fn from_env() -> Self {
        Self {
            list_ttl: parse_duration_secs("CACHE_TTL_PHOTOGRAPHERS", 300),
            detail_ttl: parse_duration_secs("CACHE_TTL_PHOTOGRAPHER_DETAIL", 600),
        }
    }
}

fn parse_duration_secs(env_var: &str, default: u64) -> Duration {
    std::env::var(env_var)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(default))
}

/// In-process caches for the two read endpoints. Values are serialized JSON,
/// so a cached entry can be replayed without touching the snapshot.
pub struct ResponseCache {
    lists: Cache<String, String>,
    details: Cache<u64, String>,
}

impl ResponseCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            lists: Cache::builder()
                .time_to_live(config.list_ttl)
                .max_capacity(256)
                .build(),
            details: Cache::builder()
                .time_to_live(config.detail_ttl)
                .max_capacity(1024)
                .build(),
        }
    }

    /// Get a cached filtered listing.
    pub async fn get_list(&self, key: &str) -> Option<String> {
        self.lists.get(key).await
    }

    pub async fn put_list(&self, key: String, body: String) {
        self.lists.insert(key, body).await;
    }

    /// Get a cached detail response.
    pub async fn get_detail(&self, id: u64) -> Option<String> {
        self.details.get(&id).await
    }

    pub async fn put_detail(&self, id: u64, body: String) {
        self.details.insert(id, body).await;
    }
}

/// Cache key generators.
pub mod keys {
    use crate::models::filters::FilterState;

    /// Key for a filtered listing.
    pub fn photographer_list(filters: &FilterState) -> String {
        format!("photographers:list:{}", filters.fingerprint())
    }
}

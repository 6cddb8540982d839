// Key/value cache abstraction
// Decision: Values are plain strings; the gateway never interprets them
// Decision: Every write carries the same fixed TTL

pub mod memory;
pub mod redis_store;

pub use memory::InMemoryCache;
pub use redis_store::RedisCache;

use crate::error::DependencyError;
use async_trait::async_trait;
use std::time::Duration;

/// Expiry applied to every value written through the gateway (one hour).
pub const CACHE_TTL: Duration = Duration::from_secs(3600);

/// External key/value cache
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// `None` when the key is absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, DependencyError>;

    /// Store `value` under `key`, expiring after `ttl`.
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), DependencyError>;

    /// Round-trip to the cache.
    async fn ping(&self) -> Result<(), DependencyError>;
}

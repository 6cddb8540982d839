// In-memory cache for dev mode and tests
// Decision: Expired entries are dropped lazily on read

use super::CacheStore;
use crate::error::DependencyError;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

struct Entry {
    value: String,
    expires_at: Instant,
}

#[derive(Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .values()
            .filter(|e| e.expires_at > now)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheStore for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, DependencyError> {
        let now = Instant::now();
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return Ok(None),
                Some(entry) if entry.expires_at > now => return Ok(Some(entry.value.clone())),
                Some(_) => {}
            }
        }

        let mut entries = self.entries.write();
        if entries.get(key).is_some_and(|e| e.expires_at <= now) {
            entries.remove(key);
        }
        Ok(None)
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), DependencyError> {
        self.entries.write().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn ping(&self) -> Result<(), DependencyError> {
        Ok(())
    }
}

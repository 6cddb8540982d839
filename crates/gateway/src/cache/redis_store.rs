// Redis-backed cache
// Decision: One ConnectionManager shared by all requests, created on first use
//
// ConnectionManager reconnects on its own after a dropped connection, so a
// Redis restart only fails the in-flight calls.

use super::CacheStore;
use crate::error::DependencyError;
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::time::Duration;
use tokio::sync::OnceCell;

pub struct RedisCache {
    client: redis::Client,
    connection: OnceCell<ConnectionManager>,
}

impl RedisCache {
    /// Parse the URL. No connection is made until the first command.
    pub fn open(redis_url: &str) -> Result<Self, DependencyError> {
        let client = redis::Client::open(redis_url)?;
        Ok(Self {
            client,
            connection: OnceCell::new(),
        })
    }

    async fn connection(&self) -> Result<ConnectionManager, DependencyError> {
        let conn = self
            .connection
            .get_or_try_init(|| async {
                tracing::debug!("Connecting to Redis");
                ConnectionManager::new(self.client.clone()).await
            })
            .await?;
        Ok(conn.clone())
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, DependencyError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), DependencyError> {
        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs()).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), DependencyError> {
        let mut conn = self.connection().await?;
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await?;
        Ok(())
    }
}

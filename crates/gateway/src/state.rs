// Shared gateway state

use crate::cache::{CacheStore, InMemoryCache, RedisCache};
use crate::config::{redact_url, GatewayConfig};
use crate::database::{DatabaseProbe, InMemoryDatabase, PostgresProbe};
use crate::error::DependencyError;
use std::sync::Arc;
use std::time::Duration;

/// App state shared across gateway routes
#[derive(Clone)]
pub struct GatewayState {
    pub cache: Arc<dyn CacheStore>,
    pub database: Arc<dyn DatabaseProbe>,
    /// Upper bound on each dependency check in the health probe
    pub health_check_timeout: Duration,
}

impl GatewayState {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        database: Arc<dyn DatabaseProbe>,
        health_check_timeout: Duration,
    ) -> Self {
        Self {
            cache,
            database,
            health_check_timeout,
        }
    }

    /// In-memory cache and an always-reachable database
    pub fn in_memory(health_check_timeout: Duration) -> Self {
        Self::new(
            Arc::new(InMemoryCache::new()),
            Arc::new(InMemoryDatabase),
            health_check_timeout,
        )
    }

    /// Wire real or in-memory dependencies. Nothing is dialed here.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, DependencyError> {
        if config.dev_mode {
            tracing::warn!("DEV_MODE enabled: using in-memory cache and database stand-ins");
            return Ok(Self::in_memory(config.health_check_timeout));
        }

        let cache = RedisCache::open(&config.redis_url)?;
        tracing::info!(url = %redact_url(&config.redis_url), "Redis cache configured");

        let database =
            PostgresProbe::connect_lazy(&config.database_url, config.health_check_timeout)?;
        tracing::info!(url = %redact_url(&config.database_url), "Database pool configured");

        Ok(Self::new(
            Arc::new(cache),
            Arc::new(database),
            config.health_check_timeout,
        ))
    }
}

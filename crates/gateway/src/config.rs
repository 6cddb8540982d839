// Gateway configuration
//
// Environment variables:
// - HOST / PORT: listener (default 0.0.0.0:3000)
// - DATABASE_URL, or DB_HOST/DB_PORT/DB_NAME/DB_USER/DB_PASSWORD
// - REDIS_URL, or REDIS_HOST/REDIS_PORT
// - DEV_MODE: in-memory cache and database probe, no external services
// - HEALTH_CHECK_TIMEOUT_MS: bound on each health check (default 5000)

use multiapp_core::config::{env_flag, env_or, env_string};
use multiapp_core::ServerConfig;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HEALTH_CHECK_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    pub database_url: String,
    pub redis_url: String,
    pub dev_mode: bool,
    pub health_check_timeout: Duration,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        let database_url = env_string("DATABASE_URL").unwrap_or_else(|| {
            database_url_from_parts(
                &env_string("DB_HOST").unwrap_or_else(|| "postgres".to_string()),
                env_or("DB_PORT", 5432),
                &env_string("DB_NAME").unwrap_or_else(|| "multiapp".to_string()),
                &env_string("DB_USER").unwrap_or_else(|| "dev".to_string()),
                &env_string("DB_PASSWORD").unwrap_or_else(|| "devpass".to_string()),
            )
        });

        let redis_url = env_string("REDIS_URL").unwrap_or_else(|| {
            redis_url_from_parts(
                &env_string("REDIS_HOST").unwrap_or_else(|| "redis".to_string()),
                env_or("REDIS_PORT", 6379),
            )
        });

        Self {
            server: ServerConfig::from_env(DEFAULT_PORT),
            database_url,
            redis_url,
            dev_mode: env_flag("DEV_MODE"),
            health_check_timeout: Duration::from_millis(env_or(
                "HEALTH_CHECK_TIMEOUT_MS",
                DEFAULT_HEALTH_CHECK_TIMEOUT_MS,
            )),
        }
    }
}

pub fn database_url_from_parts(host: &str, port: u16, name: &str, user: &str, password: &str) -> String {
    format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name)
}

pub fn redis_url_from_parts(host: &str, port: u16) -> String {
    format!("redis://{}:{}", host, port)
}

/// Connection string with the password masked, for logs.
pub fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((credentials, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };
    match credentials.split_once(':') {
        Some((user, _)) => format!("{}://{}:***@{}", scheme, user, host),
        None => url.to_string(),
    }
}

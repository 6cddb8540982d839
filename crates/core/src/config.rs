// Environment configuration helpers
// Decision: Configuration is environment-only; a local .env file is honored when present

use std::path::PathBuf;
use std::str::FromStr;

/// Outcome of looking for a `.env` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotenvStatus {
    Loaded(PathBuf),
    Missing,
    Failed(String),
}

impl DotenvStatus {
    fn from_result(result: Result<PathBuf, dotenvy::Error>) -> Self {
        match result {
            Ok(path) => Self::Loaded(path),
            Err(e) if e.not_found() => Self::Missing,
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    /// Report the outcome. Call once a subscriber is installed.
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
            Self::Missing => {}
            Self::Failed(reason) => tracing::warn!(%reason, "Failed to load .env file"),
        }
    }
}

/// Load variables from `.env` if one exists. Missing file is not an error.
pub fn load_dotenv() -> DotenvStatus {
    DotenvStatus::from_result(dotenvy::dotenv())
}

/// Read a variable, treating empty values as unset.
pub fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Read and parse a variable, falling back to `default` when unset or invalid.
pub fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match env_string(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Invalid value, using default");
            default
        }),
        None => default,
    }
}

/// Read a boolean flag ("true"/"1"/"yes", case-insensitive).
pub fn env_flag(key: &str) -> bool {
    env_string(key)
        .map(|v| parse_flag(&v))
        .unwrap_or(false)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

/// Listener address for an HTTP service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Reads `HOST` (default "0.0.0.0") and `PORT` (default `default_port`).
    pub fn from_env(default_port: u16) -> Self {
        Self {
            host: env_string("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: env_or("PORT", default_port),
        }
    }

    /// `host:port` for binding; the host may be a name or an address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

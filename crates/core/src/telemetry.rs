// Telemetry Module
//
// Console logging via tracing-subscriber. Filter comes from RUST_LOG/LOG_LEVEL,
// falling back to a per-service default; LOG_FORMAT=json switches to JSON lines.

use crate::config::env_string;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Configuration for logging
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name recorded on the startup line
    pub service_name: String,
    /// Service version
    pub service_version: Option<String>,
    /// Log filter (e.g., "info", "multiapp_gateway=debug")
    pub log_filter: Option<String>,
    /// Filter used when `log_filter` is unset or invalid
    pub default_filter: String,
    pub format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "multiapp".to_string(),
            service_version: None,
            log_filter: None,
            default_filter: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables
    ///
    /// Environment variables:
    /// - `OTEL_SERVICE_NAME`: Service name (default: `service_name`)
    /// - `RUST_LOG` or `LOG_LEVEL`: Log filter
    /// - `LOG_FORMAT`: "json" for JSON lines, anything else for human-readable
    pub fn from_env(service_name: &str, default_filter: &str) -> Self {
        Self {
            service_name: env_string("OTEL_SERVICE_NAME")
                .unwrap_or_else(|| service_name.to_string()),
            service_version: None,
            log_filter: env_string("RUST_LOG").or_else(|| env_string("LOG_LEVEL")),
            default_filter: default_filter.to_string(),
            format: env_string("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(LogFormat::Pretty),
        }
    }

    fn filter(&self) -> EnvFilter {
        self.log_filter
            .as_ref()
            .and_then(|f| EnvFilter::try_new(f).ok())
            .unwrap_or_else(|| EnvFilter::new(&self.default_filter))
    }
}

/// Install the global subscriber. Call once, at the top of `main`.
pub fn init_telemetry(config: TelemetryConfig) {
    let registry = tracing_subscriber::registry().with(config.filter());

    match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).init(),
    }

    tracing::info!(
        service = %config.service_name,
        version = config.service_version.as_deref().unwrap_or("unknown"),
        "Telemetry initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(""), LogFormat::Pretty);
    }

    #[test]
    fn test_unset_filter_uses_default() {
        let config = TelemetryConfig {
            log_filter: None,
            default_filter: "warn".to_string(),
            ..TelemetryConfig::default()
        };
        assert_eq!(config.filter().to_string(), "warn");
    }
}

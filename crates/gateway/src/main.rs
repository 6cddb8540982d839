// Multiapp gateway server

use anyhow::{Context, Result};
use multiapp_core::config::load_dotenv;
use multiapp_core::telemetry::{init_telemetry, TelemetryConfig};
use multiapp_gateway::config::GatewayConfig;
use multiapp_gateway::{router, GatewayState};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = load_dotenv();

    let mut telemetry_config = TelemetryConfig::from_env(
        "multiapp-gateway",
        "multiapp_gateway=debug,multiapp_core=debug,tower_http=debug",
    );
    telemetry_config.service_version = Some(env!("CARGO_PKG_VERSION").to_string());
    init_telemetry(telemetry_config);
    dotenv.log();

    tracing::info!("multiapp-gateway starting...");

    let config = GatewayConfig::from_env();
    let addr = config.server.bind_addr();

    let state =
        GatewayState::from_config(&config).context("Failed to configure cache and database")?;

    multiapp_core::http::serve(router(state), &addr).await
}

// Multiapp events server

use anyhow::Result;
use multiapp_core::config::load_dotenv;
use multiapp_core::telemetry::{init_telemetry, TelemetryConfig};
use multiapp_core::ServerConfig;
use multiapp_events::{router, AppState};

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = load_dotenv();

    let mut telemetry_config = TelemetryConfig::from_env(
        "multiapp-events",
        "multiapp_events=debug,multiapp_core=debug,tower_http=debug",
    );
    telemetry_config.service_version = Some(env!("CARGO_PKG_VERSION").to_string());
    init_telemetry(telemetry_config);
    dotenv.log();

    tracing::info!("multiapp-events starting...");

    let server_config = ServerConfig::from_env(DEFAULT_PORT);
    let addr = server_config.bind_addr();

    let state = AppState::seeded();
    tracing::info!(events = state.service.list().len(), "Event collection seeded");

    multiapp_core::http::serve(router(state), &addr).await
}

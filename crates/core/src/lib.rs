// Multiapp shared core
//
// Plumbing shared by the events service and the gateway:
// - error: ApiError taxonomy and the `{"error": ...}` response body
// - config: environment loading helpers and the listener address
// - http: CORS/trace/panic layers, 404 fallback, server bootstrap
// - telemetry: tracing-subscriber initialization

pub mod config;
pub mod error;
pub mod http;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorResponse, MessageResponse};

// HTTP API routes
//
// All gateway routes share GatewayState.

pub mod cache;
pub mod health;
pub mod products;

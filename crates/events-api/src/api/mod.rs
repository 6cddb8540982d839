// HTTP API routes
//
// Each submodule handles one resource with its own AppState.

pub mod events;
pub mod health;
pub mod validation;

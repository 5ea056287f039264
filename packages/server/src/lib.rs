// Skateway Conditions - API Core
//
// Read-only HTTP views over aggregated ice and weather sensor windows for the
// monitored skateway locations. All durable state lives in Cosmos DB.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;

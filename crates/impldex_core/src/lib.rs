//! Core coordination logic for the impldex documentation registry.
//! This crate is the single source of truth for registration invariants.

pub mod logging;
pub mod model;
pub mod registry;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::table::ImplementorTable;
pub use registry::bridge::{BridgePhase, RegistryBridge, TableHandler};
pub use registry::sink::MergingSink;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

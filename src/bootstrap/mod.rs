//! Process bootstrap: config loading, tracing and dependency wiring.

pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config};
pub use wiring::{settings_from_env, wire_dependencies};

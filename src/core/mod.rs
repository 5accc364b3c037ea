/*!
 * Core Module
 * Fundamental simulator types, limits and configuration
 */

pub mod config;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use config::{ConfigError, ConfigResult, SimulationConfig};
pub use types::*;

//! Line data models, configuration and error types.

pub mod config;
pub mod types;

// Re-exports for convenience
pub use config::{LineConfig, DEFAULT_STATIONS};
pub use types::{LineState, MetroError, Passenger, Result};

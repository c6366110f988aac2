//! # circle-line-transit
//!
//! In-memory simulation of a single circular metro line.
//!
//! ## Features
//!
//! - **Circular line**: a train cycles through a fixed, ordered list of stations
//! - **Validated boarding**: riders may only head for stations on the line
//! - **Explicit offboarding**: riders leave when the caller asks who gets off
//! - **Config files**: `LineConfig` and state snapshots are serde-ready (optional)
//!
//! ## Example
//!
//! ```
//! use circle_line_transit::prelude::*;
//!
//! let mut metro = MetroSystem::new(["A", "B", "C", "D", "E"]).unwrap();
//! metro.add_passenger(Passenger::new("Luis", "C")).unwrap();
//!
//! // A -> B -> C
//! metro.move_to_next_station();
//! assert!(metro.get_offboarding_passengers().is_empty());
//! metro.move_to_next_station();
//! let off = metro.get_offboarding_passengers();
//!
//! assert_eq!(off[0].name().as_str(), "Luis");
//! assert_eq!(metro.get_state().position.as_str(), "C");
//! assert!(metro.get_state().passengers.is_empty());
//! ```

pub mod identifiers;
pub mod models;
pub mod system;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{config::*, types::*};
    pub use crate::system::MetroSystem;
}

pub use prelude::*;

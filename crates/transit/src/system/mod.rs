//! Line state machines.

pub mod metro;

pub use metro::MetroSystem;

//! Timestep driver for the riffle simulator.
//!
//! [`Simulation`] owns the two distribution buffers, the obstacle map, and
//! the average-velocity log, and advances the four-stage lattice update a
//! fixed number of times. Construction validates the configuration once;
//! the hot loop has no recoverable error conditions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod simulation;

pub use config::{ConfigError, SimConfig};
pub use metrics::RunSummary;
pub use simulation::Simulation;

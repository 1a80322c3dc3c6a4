//! Core types for the riffle lattice Boltzmann simulator.
//!
//! This is the leaf crate with zero internal riffle dependencies. It defines
//! the simulation parameter bundle, the D2Q9 speed-set constants, and the
//! parameter error type used throughout the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod params;
pub mod speeds;

// Re-export core types at crate root for convenience.
pub use error::ParamsError;
pub use params::SimParams;
pub use speeds::{
    opposite, CS_SQ, EAST_SPEEDS, EX, EY, NORTH_SPEEDS, NUM_SPEEDS, SOUTH_SPEEDS, WEIGHTS,
    WEST_SPEEDS, W_AXIS, W_DIAG, W_REST,
};

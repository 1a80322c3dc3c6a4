//! Riffle: a D2Q9 lattice Boltzmann simulator for channel flow with
//! interior obstacles.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the riffle sub-crates. For most users, adding `riffle` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use riffle::prelude::*;
//!
//! let params = SimParams {
//!     nx: 16,
//!     ny: 16,
//!     max_iters: 10,
//!     reynolds_dim: 16,
//!     density: 0.1,
//!     accel: 0.005,
//!     omega: 1.0,
//! };
//! let lattice = Lattice::new(params.nx, params.ny).unwrap();
//! let obstacles = ObstacleMap::open(lattice);
//!
//! let mut sim = Simulation::new(SimConfig { params, obstacles }).unwrap();
//! let summary = sim.run();
//! assert_eq!(summary.steps, 10);
//! assert!(sim.average_velocity() > 0.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `riffle-core` | Parameters and the D2Q9 speed set |
//! | [`lattice`] | `riffle-lattice` | Grid geometry, distribution buffers, obstacles |
//! | [`kernels`] | `riffle-kernels` | The four stage kernels |
//! | [`engine`] | `riffle-engine` | The timestep driver |
//! | [`io`] | `riffle-io` | File readers, writers, and the console report |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Parameters and the D2Q9 speed set (`riffle-core`).
pub use riffle_core as types;

/// Grid geometry, distribution storage, and the obstacle map
/// (`riffle-lattice`).
pub use riffle_lattice as lattice;

/// The four stage kernels (`riffle-kernels`).
pub use riffle_kernels as kernels;

/// The timestep driver (`riffle-engine`).
pub use riffle_engine as engine;

/// File formats and the console report (`riffle-io`).
pub use riffle_io as io;

/// Common imports for typical riffle usage.
///
/// ```rust
/// use riffle::prelude::*;
/// ```
pub mod prelude {
    pub use riffle_core::{ParamsError, SimParams};
    pub use riffle_engine::{ConfigError, RunSummary, SimConfig, Simulation};
    pub use riffle_lattice::{DistField, Lattice, LatticeError, ObstacleMap};
}

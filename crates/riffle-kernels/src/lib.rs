//! Stage kernels for the D2Q9/BGK lattice update.
//!
//! One timestep runs four barrier-separated stages over the grid:
//!
//! 1. [`accelerate`] — inject momentum along the inflow row of `f`.
//! 2. [`stream`] — propagate every population from its upstream neighbour
//!    into `f'` and cache the macroscopic moments.
//! 3. [`collide`] — relax fluid cells toward equilibrium and bounce back
//!    solid cells, writing the authoritative `f`.
//! 4. [`average_velocity`] — reduce |u| over fluid cells.
//!
//! Every stage is a rayon data-parallel loop; rayon's blocking `for_each`
//! provides the stage barrier. The reduction folds ordered per-row
//! partials, so results are independent of thread count.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod accelerate;
pub mod collide;
pub mod reduce;
pub mod stream;

pub use accelerate::{accelerate, Acceleration};
pub use collide::collide;
pub use reduce::average_velocity;
pub use stream::stream;

//! Grid geometry and storage for the riffle simulator.
//!
//! Provides the periodic 2D lattice ([`Lattice`]), the nine-plane
//! distribution buffer ([`DistField`]), the read-only obstacle map
//! ([`ObstacleMap`]), and the per-timestep moment scratch
//! ([`MomentScratch`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dist;
pub mod error;
pub mod geometry;
pub mod moments;
pub mod obstacles;

pub use dist::DistField;
pub use error::LatticeError;
pub use geometry::Lattice;
pub use moments::{cell_moments, MomentScratch, Moments};
pub use obstacles::ObstacleMap;

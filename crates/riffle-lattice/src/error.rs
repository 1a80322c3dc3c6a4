//! Error types for lattice construction.

use std::error::Error;
use std::fmt;

/// Errors from lattice and obstacle-map construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// One or both grid dimensions are zero.
    EmptyGrid,
    /// An obstacle coordinate lies outside the grid.
    CoordOutOfRange {
        /// Which axis (`"x"` or `"y"`).
        axis: &'static str,
        /// The rejected coordinate.
        value: usize,
        /// Exclusive upper bound for the axis.
        bound: usize,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid has zero cells"),
            Self::CoordOutOfRange { axis, value, bound } => {
                write!(f, "obstacle {axis}-coordinate {value} out of range [0, {bound})")
            }
        }
    }
}

impl Error for LatticeError {}

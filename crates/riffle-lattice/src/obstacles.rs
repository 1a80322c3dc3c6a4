//! Read-only obstacle map.
//!
//! A cell is either fluid or solid. The map is fixed at initialisation and
//! shared without synchronisation by every stage; the fluid-cell count is
//! precomputed because the average-velocity reduction divides by it every
//! timestep.

use crate::error::LatticeError;
use crate::geometry::Lattice;

/// Per-cell solid/fluid mask with a precomputed fluid-cell count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObstacleMap {
    lattice: Lattice,
    /// `true` = solid, row-major.
    blocked: Vec<bool>,
    fluid_cells: usize,
}

impl ObstacleMap {
    /// An all-fluid map (empty obstacle file).
    pub fn open(lattice: Lattice) -> Self {
        Self {
            lattice,
            blocked: vec![false; lattice.cell_count()],
            fluid_cells: lattice.cell_count(),
        }
    }

    /// Build a map from `(x, y)` coordinates of blocked cells.
    ///
    /// Coordinates are validated against the grid extent; listing the same
    /// cell more than once is harmless.
    pub fn from_blocked(
        lattice: Lattice,
        cells: &[(usize, usize)],
    ) -> Result<Self, LatticeError> {
        let mut map = Self::open(lattice);
        for &(x, y) in cells {
            if x >= lattice.nx() {
                return Err(LatticeError::CoordOutOfRange {
                    axis: "x",
                    value: x,
                    bound: lattice.nx(),
                });
            }
            if y >= lattice.ny() {
                return Err(LatticeError::CoordOutOfRange {
                    axis: "y",
                    value: y,
                    bound: lattice.ny(),
                });
            }
            let rank = lattice.rank(y, x);
            if !map.blocked[rank] {
                map.blocked[rank] = true;
                map.fluid_cells -= 1;
            }
        }
        Ok(map)
    }

    /// The grid this map is shaped for.
    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    /// Whether the cell at `rank` is solid.
    pub fn is_blocked(&self, rank: usize) -> bool {
        self.blocked[rank]
    }

    /// The row-major mask, `true` = solid.
    pub fn as_slice(&self) -> &[bool] {
        &self.blocked
    }

    /// Number of fluid cells.
    pub fn fluid_cells(&self) -> usize {
        self.fluid_cells
    }
}

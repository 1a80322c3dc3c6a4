//! Simulation configuration and validation.

use std::error::Error;
use std::fmt;

use riffle_core::{ParamsError, SimParams};
use riffle_lattice::ObstacleMap;

/// Errors detected during [`SimConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The parameter bundle failed validation.
    Params(ParamsError),
    /// The obstacle map was built for a different grid extent.
    GridMismatch {
        /// `(nx, ny)` from the parameter bundle.
        params: (usize, usize),
        /// `(nx, ny)` of the obstacle map's lattice.
        obstacles: (usize, usize),
    },
    /// Every cell is solid; the average-velocity reduction would divide
    /// by zero.
    AllCellsBlocked,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Params(e) => write!(f, "invalid parameters: {e}"),
            Self::GridMismatch { params, obstacles } => write!(
                f,
                "obstacle map extent {}x{} does not match parameter extent {}x{}",
                obstacles.0, obstacles.1, params.0, params.1
            ),
            Self::AllCellsBlocked => write!(f, "obstacle map leaves no fluid cells"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Params(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParamsError> for ConfigError {
    fn from(e: ParamsError) -> Self {
        Self::Params(e)
    }
}

/// Complete configuration for constructing a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// The immutable parameter bundle.
    pub params: SimParams,
    /// The obstacle map, already shaped for `params`' grid.
    pub obstacles: ObstacleMap,
}

impl SimConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.params.validate()?;
        let lattice = self.obstacles.lattice();
        if (lattice.nx(), lattice.ny()) != (self.params.nx, self.params.ny) {
            return Err(ConfigError::GridMismatch {
                params: (self.params.nx, self.params.ny),
                obstacles: (lattice.nx(), lattice.ny()),
            });
        }
        if self.obstacles.fluid_cells() == 0 {
            return Err(ConfigError::AllCellsBlocked);
        }
        Ok(())
    }
}

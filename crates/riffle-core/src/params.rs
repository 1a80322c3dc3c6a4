//! Simulation parameter bundle.
//!
//! [`SimParams`] holds the seven values read from the parameter file. It is
//! immutable after load; [`SimParams::validate`] checks structural
//! invariants once, before any buffers are allocated.

use crate::error::ParamsError;

/// The complete parameter set for one simulation run.
///
/// Loaded from the parameter file (seven whitespace-separated tokens in
/// field order) and never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    /// Grid extent in the x-direction (columns).
    pub nx: usize,
    /// Grid extent in the y-direction (rows).
    pub ny: usize,
    /// Number of timesteps to run.
    pub max_iters: usize,
    /// Characteristic length for the Reynolds-number report.
    pub reynolds_dim: usize,
    /// Initial density per link.
    pub density: f32,
    /// Acceleration applied along the inflow row each timestep.
    pub accel: f32,
    /// BGK relaxation parameter, in `(0, 2)`.
    pub omega: f32,
}

impl SimParams {
    /// Validate all structural invariants.
    ///
    /// The grid must be non-empty and at least two rows tall (the
    /// accelerate stage targets row `ny − 2`), the iteration count and
    /// Reynolds dimension must be positive, the density must be positive,
    /// and `omega` must lie strictly inside `(0, 2)` for the BGK operator
    /// to relax rather than diverge.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.nx == 0 {
            return Err(ParamsError::ZeroDimension { name: "nx" });
        }
        if self.ny == 0 {
            return Err(ParamsError::ZeroDimension { name: "ny" });
        }
        if self.ny < 2 {
            return Err(ParamsError::GridTooShort { ny: self.ny });
        }
        if self.max_iters == 0 {
            return Err(ParamsError::ZeroIterations);
        }
        if self.reynolds_dim == 0 {
            return Err(ParamsError::ZeroReynoldsDim);
        }
        // `!(x > 0.0)` also rejects NaN.
        if !(self.density > 0.0) {
            return Err(ParamsError::NonPositiveDensity {
                value: self.density,
            });
        }
        if !(self.omega > 0.0 && self.omega < 2.0) {
            return Err(ParamsError::OmegaOutOfRange { value: self.omega });
        }
        Ok(())
    }

    /// Total number of lattice cells.
    pub fn cell_count(&self) -> usize {
        self.nx * self.ny
    }

    /// The row targeted by the accelerate stage: just below the top wall.
    pub fn accel_row(&self) -> usize {
        self.ny - 2
    }

    /// Kinematic viscosity implied by the relaxation parameter:
    /// `ν = (2/ω − 1) / 6`.
    pub fn viscosity(&self) -> f32 {
        1.0 / 6.0 * (2.0 / self.omega - 1.0)
    }
}

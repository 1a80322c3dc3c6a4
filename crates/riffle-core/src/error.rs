//! Parameter validation errors.

use std::error::Error;
use std::fmt;

/// Errors detected during [`SimParams::validate`](crate::SimParams::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ParamsError {
    /// A grid dimension is zero.
    ZeroDimension {
        /// Which dimension (`"nx"` or `"ny"`).
        name: &'static str,
    },
    /// The grid is too short for the accelerate row at `ny − 2`.
    GridTooShort {
        /// The rejected row count.
        ny: usize,
    },
    /// The iteration count is zero.
    ZeroIterations,
    /// The Reynolds characteristic length is zero.
    ZeroReynoldsDim,
    /// The initial density is zero, negative, or NaN.
    NonPositiveDensity {
        /// The rejected value.
        value: f32,
    },
    /// The relaxation parameter lies outside the open interval `(0, 2)`.
    OmegaOutOfRange {
        /// The rejected value.
        value: f32,
    },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { name } => write!(f, "grid dimension {name} must be positive"),
            Self::GridTooShort { ny } => {
                write!(f, "grid must be at least 2 rows tall for the inflow row, got ny={ny}")
            }
            Self::ZeroIterations => write!(f, "max_iters must be positive"),
            Self::ZeroReynoldsDim => write!(f, "reynolds_dim must be positive"),
            Self::NonPositiveDensity { value } => {
                write!(f, "density must be positive, got {value}")
            }
            Self::OmegaOutOfRange { value } => {
                write!(f, "omega must lie in (0, 2), got {value}")
            }
        }
    }
}

impl Error for ParamsError {}

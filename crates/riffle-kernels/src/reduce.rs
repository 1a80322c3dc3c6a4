//! Average-velocity reduction.
//!
//! Runs after collision, so the moments cached during streaming are stale;
//! the reduction recomputes them from the fresh `f`. Rows map to partial
//! sums collected in row order and folded sequentially, so the result does
//! not depend on the rayon thread count.

use rayon::prelude::*;
use riffle_lattice::{cell_moments, DistField, ObstacleMap};

/// Mean |u| over fluid cells.
///
/// Solid cells contribute nothing; the divisor is the precomputed
/// fluid-cell count.
pub fn average_velocity(f: &DistField, obstacles: &ObstacleMap) -> f32 {
    let lattice = f.lattice();
    let nx = lattice.nx();
    let blocked = obstacles.as_slice();

    let partials: Vec<f32> = (0..lattice.ny())
        .into_par_iter()
        .map(|y| {
            let mut row_sum = 0.0f32;
            for x in 0..nx {
                let i = lattice.rank(y, x);
                if !blocked[i] {
                    row_sum += cell_moments(f, i).speed();
                }
            }
            row_sum
        })
        .collect();

    let total: f32 = partials.iter().sum();
    total / obstacles.fluid_cells() as f32
}

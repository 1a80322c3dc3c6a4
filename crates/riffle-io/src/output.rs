//! Output-file writers.
//!
//! `final_state.dat` carries one line per cell in row-major `(y, x)` order:
//! `x y u_x u_y |u| pressure flag`. Solid cells emit zero velocity and the
//! reference pressure `density·c_s²`; fluid cells emit moments recomputed
//! from the final distribution. `av_vels.dat` carries one `t:\t<avg>` line
//! per timestep. All floats use `%.12E` notation.

use std::io::{self, Write};

use riffle_core::{SimParams, CS_SQ};
use riffle_lattice::{cell_moments, DistField, ObstacleMap};

use crate::fmt::format_e12;

/// Conventional name of the final-state file.
pub const FINAL_STATE_FILE: &str = "final_state.dat";

/// Conventional name of the average-velocity file.
pub const AV_VELS_FILE: &str = "av_vels.dat";

/// Write the per-cell final state.
pub fn write_final_state<W: Write>(
    w: &mut W,
    params: &SimParams,
    obstacles: &ObstacleMap,
    f: &DistField,
) -> io::Result<()> {
    let lattice = obstacles.lattice();
    for y in 0..lattice.ny() {
        for x in 0..lattice.nx() {
            let rank = lattice.rank(y, x);
            let solid = obstacles.is_blocked(rank);
            let (ux, uy, speed, pressure) = if solid {
                (0.0f32, 0.0f32, 0.0f32, params.density * CS_SQ)
            } else {
                let m = cell_moments(f, rank);
                (m.ux, m.uy, m.speed(), m.rho * CS_SQ)
            };
            writeln!(
                w,
                "{x} {y} {} {} {} {} {}",
                format_e12(f64::from(ux)),
                format_e12(f64::from(uy)),
                format_e12(f64::from(speed)),
                format_e12(f64::from(pressure)),
                i32::from(solid),
            )?;
        }
    }
    Ok(())
}

/// Write the average-velocity log, one timestep per line.
pub fn write_avg_velocities<W: Write>(w: &mut W, avg_vels: &[f32]) -> io::Result<()> {
    for (t, avg) in avg_vels.iter().enumerate() {
        writeln!(w, "{t}:\t{}", format_e12(f64::from(*avg)))?;
    }
    Ok(())
}

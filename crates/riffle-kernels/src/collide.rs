//! Collision stage: BGK relaxation for fluid cells, bounce-back for solids.
//!
//! Reads the post-streaming buffer `f'` and the cached moments, writes the
//! authoritative `f`. Output plane `k` depends only on input planes `k`
//! and `opposite(k)` plus read-only state, so the nine planes (and the
//! rows within them) run in parallel.
//!
//! At a solid cell each moving population is replaced by its reversed
//! partner from `f'`; the rest population is left alone (it is never read
//! at solids after initialisation).

use rayon::prelude::*;
use riffle_core::{opposite, EX, EY, WEIGHTS};
use riffle_lattice::{DistField, MomentScratch, ObstacleMap};

/// Relax `post` toward local equilibrium into `f`.
///
/// `moments` must be the scratch cached by the streaming stage for the
/// same `post` buffer.
pub fn collide(
    post: &DistField,
    moments: &MomentScratch,
    obstacles: &ObstacleMap,
    omega: f32,
    f: &mut DistField,
) {
    let lattice = post.lattice();
    let nx = lattice.nx();
    let n = lattice.cell_count();
    let blocked = obstacles.as_slice();
    let rho = moments.rho();
    let ux = moments.ux();
    let uy = moments.uy();

    f.as_mut_slice()
        .par_chunks_exact_mut(n)
        .enumerate()
        .for_each(|(k, out_plane)| {
            let streamed = post.plane(k);
            let reflected = post.plane(opposite(k));
            let w = WEIGHTS[k];
            let ex = EX[k];
            let ey = EY[k];
            out_plane
                .par_chunks_exact_mut(nx)
                .enumerate()
                .for_each(|(y, row)| {
                    let base = y * nx;
                    for (x, value) in row.iter_mut().enumerate() {
                        let i = base + x;
                        if blocked[i] {
                            if k != 0 {
                                *value = reflected[i];
                            }
                        } else {
                            let e_dot_u = ex * ux[i] + ey * uy[i];
                            let u_sq = ux[i] * ux[i] + uy[i] * uy[i];
                            let f_eq = w
                                * rho[i]
                                * (1.0 + 3.0 * e_dot_u + 4.5 * e_dot_u * e_dot_u - 1.5 * u_sq);
                            *value = streamed[i] + omega * (f_eq - streamed[i]);
                        }
                    }
                });
        });
}

//! Benchmark profiles for the riffle simulator.
//!
//! Provides pre-built [`SimConfig`] profiles shared by the criterion
//! benches:
//!
//! - [`channel_profile`]: 128×128 walled channel with a square obstacle
//! - [`stress_profile`]: 256×256 at the same geometry, for scaling runs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use riffle_core::SimParams;
use riffle_engine::SimConfig;
use riffle_lattice::{Lattice, ObstacleMap};

/// Walled channel with a centred square obstacle.
fn channel_obstacles(lattice: Lattice) -> ObstacleMap {
    let nx = lattice.nx();
    let ny = lattice.ny();
    let mut blocked: Vec<(usize, usize)> = Vec::new();
    for x in 0..nx {
        blocked.push((x, 0));
        blocked.push((x, ny - 1));
    }
    let side = ny / 8;
    let (cx, cy) = (nx / 4, ny / 2);
    for y in cy.saturating_sub(side)..(cy + side).min(ny - 1) {
        for x in cx.saturating_sub(side)..(cx + side).min(nx) {
            blocked.push((x, y));
        }
    }
    ObstacleMap::from_blocked(lattice, &blocked).expect("obstacle layout is in range")
}

fn profile(nx: usize, ny: usize, max_iters: usize) -> SimConfig {
    let params = SimParams {
        nx,
        ny,
        max_iters,
        reynolds_dim: ny,
        density: 0.1,
        accel: 0.005,
        omega: 1.0,
    };
    let lattice = Lattice::new(nx, ny).expect("profile dimensions are positive");
    SimConfig {
        params,
        obstacles: channel_obstacles(lattice),
    }
}

/// Reference benchmark profile: 128×128 walled channel.
pub fn channel_profile(max_iters: usize) -> SimConfig {
    profile(128, 128, max_iters)
}

/// Stress benchmark profile: 256×256 at the same geometry.
pub fn stress_profile(max_iters: usize) -> SimConfig {
    profile(256, 256, max_iters)
}

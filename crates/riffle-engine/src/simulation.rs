//! The fixed-count timestep driver.

use std::time::Instant;

use tracing::debug;

use riffle_core::SimParams;
use riffle_kernels::{accelerate, average_velocity, collide, stream, Acceleration};
use riffle_lattice::{DistField, MomentScratch, ObstacleMap};

use crate::config::{ConfigError, SimConfig};
use crate::metrics::RunSummary;

/// A running simulation: the two distribution buffers, the read-only
/// obstacle map, the per-timestep moment scratch, and the append-only
/// average-velocity log.
///
/// After every completed timestep the authoritative state lives in `f`:
/// the accelerate stage mutates `f` in place, streaming writes the shadow
/// buffer from `f`, and collision writes `f` back from the shadow buffer.
pub struct Simulation {
    params: SimParams,
    obstacles: ObstacleMap,
    accel: Acceleration,
    f: DistField,
    streamed: DistField,
    moments: MomentScratch,
    avg_vels: Vec<f32>,
}

impl Simulation {
    /// Validate `config` and allocate the simulation state.
    ///
    /// Every cell of `f`, solid cells included, starts at the resting
    /// equilibrium for the configured density.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let SimConfig { params, obstacles } = config;
        let lattice = obstacles.lattice();
        Ok(Self {
            params,
            accel: Acceleration::from_params(&params),
            f: DistField::resting(lattice, params.density),
            streamed: DistField::zeroed(lattice),
            moments: MomentScratch::new(lattice.cell_count()),
            avg_vels: Vec::with_capacity(params.max_iters),
            obstacles,
        })
    }

    /// Advance one timestep and return the average velocity it produced.
    ///
    /// Stage order: accelerate → stream+moments → collide/bounce-back →
    /// reduce. The result is appended to the average-velocity log.
    pub fn step(&mut self) -> f32 {
        accelerate(&mut self.f, &self.obstacles, &self.accel);
        stream(&self.f, &mut self.streamed, &mut self.moments);
        collide(
            &self.streamed,
            &self.moments,
            &self.obstacles,
            self.params.omega,
            &mut self.f,
        );
        let avg = average_velocity(&self.f, &self.obstacles);
        self.avg_vels.push(avg);
        avg
    }

    /// Run the remaining timesteps up to `max_iters`.
    ///
    /// Returns the number of steps executed by this call and the
    /// wall-clock time they took.
    pub fn run(&mut self) -> RunSummary {
        let start = Instant::now();
        let already = self.avg_vels.len();
        while self.avg_vels.len() < self.params.max_iters {
            let tick = self.avg_vels.len();
            let avg = self.step();
            debug!(tick, avg_velocity = avg, "timestep complete");
        }
        RunSummary {
            steps: self.avg_vels.len() - already,
            elapsed: start.elapsed(),
        }
    }

    /// The parameter bundle.
    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// The obstacle map.
    pub fn obstacles(&self) -> &ObstacleMap {
        &self.obstacles
    }

    /// The authoritative distribution state.
    pub fn distribution(&self) -> &DistField {
        &self.f
    }

    /// The average velocity recorded for each completed timestep.
    pub fn avg_velocities(&self) -> &[f32] {
        &self.avg_vels
    }

    /// Recompute the average velocity from the current state.
    pub fn average_velocity(&self) -> f32 {
        average_velocity(&self.f, &self.obstacles)
    }

    /// Reynolds number from the current state:
    /// `avg_u · reynolds_dim / ν`.
    pub fn reynolds_number(&self) -> f32 {
        self.average_velocity() * self.params.reynolds_dim as f32 / self.params.viscosity()
    }

    /// Total density over the whole grid.
    ///
    /// Conserved across timesteps up to floating-point error; a drifting
    /// total indicates a corrupted distribution.
    pub fn total_density(&self) -> f32 {
        self.f.total()
    }
}

//! Run-level metrics.

use std::time::Duration;

/// Timing summary for a completed run.
#[derive(Clone, Copy, Debug)]
pub struct RunSummary {
    /// Number of timesteps executed by this `run()` call.
    pub steps: usize,
    /// Wall-clock time spent in the timestep loop.
    pub elapsed: Duration,
}

impl RunSummary {
    /// Wall-clock seconds, for reporting.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

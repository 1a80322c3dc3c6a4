//! Command-line driver for the riffle simulator.
//!
//! ```text
//! riffle-cli <PARAMFILE> <OBSTACLEFILE>
//! ```
//!
//! Reads the parameter and obstacle files, runs the configured number of
//! timesteps, writes `final_state.dat` and `av_vels.dat` into the working
//! directory, and prints the end-of-run report to stdout. Any
//! initialisation failure is fatal: the diagnostic goes to stderr and the
//! process exits non-zero.

mod rusage;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use riffle_engine::{SimConfig, Simulation};
use riffle_io::{
    load_obstacles, load_params, write_avg_velocities, write_final_state, write_report, RunReport,
    AV_VELS_FILE, FINAL_STATE_FILE,
};
use riffle_lattice::Lattice;

/// D2Q9 lattice Boltzmann channel-flow simulator.
#[derive(Parser)]
#[command(name = "riffle")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "D2Q9 lattice Boltzmann channel-flow simulator", long_about = None)]
struct Cli {
    /// Parameter file: nx ny max_iters reynolds_dim density accel omega.
    #[arg(value_name = "PARAMFILE")]
    params: PathBuf,

    /// Obstacle file: one `x y 1` line per solid cell.
    #[arg(value_name = "OBSTACLEFILE")]
    obstacles: PathBuf,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let params = load_params(&cli.params)
        .with_context(|| format!("could not read parameter file {}", cli.params.display()))?;
    params.validate()?;
    let lattice = Lattice::new(params.nx, params.ny)?;
    let obstacles = load_obstacles(&cli.obstacles, lattice)
        .with_context(|| format!("could not read obstacle file {}", cli.obstacles.display()))?;

    info!(
        nx = params.nx,
        ny = params.ny,
        max_iters = params.max_iters,
        fluid_cells = obstacles.fluid_cells(),
        omega = params.omega,
        "starting simulation"
    );

    let mut sim = Simulation::new(SimConfig { params, obstacles })?;
    let summary = sim.run();
    info!(
        steps = summary.steps,
        elapsed_s = summary.elapsed_secs(),
        "simulation complete"
    );

    let mut state = BufWriter::new(
        File::create(FINAL_STATE_FILE)
            .with_context(|| format!("could not create {FINAL_STATE_FILE}"))?,
    );
    write_final_state(&mut state, sim.params(), sim.obstacles(), sim.distribution())
        .with_context(|| format!("could not write {FINAL_STATE_FILE}"))?;
    state.flush()?;

    let mut av_vels = BufWriter::new(
        File::create(AV_VELS_FILE).with_context(|| format!("could not create {AV_VELS_FILE}"))?,
    );
    write_avg_velocities(&mut av_vels, sim.avg_velocities())
        .with_context(|| format!("could not write {AV_VELS_FILE}"))?;
    av_vels.flush()?;

    let (user_cpu_secs, system_cpu_secs) = rusage::cpu_times();
    let report = RunReport {
        reynolds: sim.reynolds_number(),
        elapsed_secs: summary.elapsed_secs(),
        user_cpu_secs,
        system_cpu_secs,
    };
    write_report(&mut io::stdout().lock(), &report)?;

    Ok(())
}

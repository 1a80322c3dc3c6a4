//! File formats for the riffle simulator.
//!
//! Readers are generic over [`std::io::BufRead`] and writers over
//! [`std::io::Write`], so tests run against in-memory buffers and
//! production code uses buffered files. All formats are plain text:
//!
//! - parameter file: seven whitespace-separated tokens;
//! - obstacle file: one `x y 1` line per solid cell;
//! - `final_state.dat` / `av_vels.dat`: `%.12E`-formatted floats;
//! - the end-of-run console report.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod fmt;
pub mod obstacles;
pub mod output;
pub mod params;
pub mod report;

pub use error::ReadError;
pub use fmt::format_e12;
pub use obstacles::{load_obstacles, read_obstacles};
pub use output::{write_avg_velocities, write_final_state, AV_VELS_FILE, FINAL_STATE_FILE};
pub use params::{load_params, read_params};
pub use report::{write_report, RunReport};

//! End-of-run console report.

use std::io::{self, Write};

use crate::fmt::format_e12;

/// The figures printed after a completed run.
#[derive(Clone, Copy, Debug)]
pub struct RunReport {
    /// Reynolds number computed from the final state.
    pub reynolds: f32,
    /// Wall-clock seconds spent in the timestep loop.
    pub elapsed_secs: f64,
    /// User CPU seconds for the process.
    pub user_cpu_secs: f64,
    /// System CPU seconds for the process.
    pub system_cpu_secs: f64,
}

/// Write the report block.
pub fn write_report<W: Write>(w: &mut W, report: &RunReport) -> io::Result<()> {
    writeln!(w, "==done==")?;
    writeln!(
        w,
        "Reynolds number:\t\t{}",
        format_e12(f64::from(report.reynolds))
    )?;
    writeln!(w, "Elapsed time:\t\t\t{:.6} (s)", report.elapsed_secs)?;
    writeln!(w, "Elapsed user CPU time:\t\t{:.6} (s)", report.user_cpu_secs)?;
    writeln!(
        w,
        "Elapsed system CPU time:\t{:.6} (s)",
        report.system_cpu_secs
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_block_matches_expected_layout() {
        let mut out = Vec::new();
        write_report(
            &mut out,
            &RunReport {
                reynolds: 9.75,
                elapsed_secs: 12.345678,
                user_cpu_secs: 11.5,
                system_cpu_secs: 0.25,
            },
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "==done==\n\
             Reynolds number:\t\t9.750000000000E+00\n\
             Elapsed time:\t\t\t12.345678 (s)\n\
             Elapsed user CPU time:\t\t11.500000 (s)\n\
             Elapsed system CPU time:\t0.250000 (s)\n"
        );
    }
}

//! Process CPU-time capture via `getrusage(2)`.

use std::mem::MaybeUninit;

fn seconds(tv: libc::timeval) -> f64 {
    tv.tv_sec as f64 + tv.tv_usec as f64 / 1_000_000.0
}

/// User and system CPU seconds consumed by this process so far.
///
/// Returns zeros if the syscall fails; the report is informational and
/// must not abort a completed run.
pub fn cpu_times() -> (f64, f64) {
    let mut usage = MaybeUninit::<libc::rusage>::zeroed();
    // SAFETY: getrusage fills the supplied rusage struct; we only read it
    // after the call reports success.
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if rc != 0 {
        return (0.0, 0.0);
    }
    let usage = unsafe { usage.assume_init() };
    (seconds(usage.ru_utime), seconds(usage.ru_stime))
}

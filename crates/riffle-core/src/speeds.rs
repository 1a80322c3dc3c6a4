//! The D2Q9 discrete speed set.
//!
//! Nine velocities per lattice site, numbered:
//!
//! ```text
//! 6 2 5
//!  \|/
//! 3-0-1
//!  /|\
//! 7 4 8
//! ```
//!
//! Speed 0 is the rest particle; 1–4 point along +x, +y, −x, −y; 5–8 are
//! the diagonals. The numbering is fixed by the wire format of the final
//! state file and must not be permuted.

/// Number of discrete velocities per lattice site.
pub const NUM_SPEEDS: usize = 9;

/// x-component of each speed vector `e_k`.
pub const EX: [f32; NUM_SPEEDS] = [0.0, 1.0, 0.0, -1.0, 0.0, 1.0, -1.0, -1.0, 1.0];

/// y-component of each speed vector `e_k`.
pub const EY: [f32; NUM_SPEEDS] = [0.0, 0.0, 1.0, 0.0, -1.0, 1.0, 1.0, -1.0, -1.0];

/// Equilibrium weight for the rest speed.
pub const W_REST: f32 = 4.0 / 9.0;

/// Equilibrium weight for the four axis speeds.
pub const W_AXIS: f32 = 1.0 / 9.0;

/// Equilibrium weight for the four diagonal speeds.
pub const W_DIAG: f32 = 1.0 / 36.0;

/// Equilibrium weight per speed index.
pub const WEIGHTS: [f32; NUM_SPEEDS] = [
    W_REST, W_AXIS, W_AXIS, W_AXIS, W_AXIS, W_DIAG, W_DIAG, W_DIAG, W_DIAG,
];

/// Square of the lattice speed of sound.
pub const CS_SQ: f32 = 1.0 / 3.0;

/// Speeds with a positive x-component (contribute `+` to `u_x`).
pub const EAST_SPEEDS: [usize; 3] = [1, 5, 8];

/// Speeds with a negative x-component (contribute `−` to `u_x`).
pub const WEST_SPEEDS: [usize; 3] = [3, 6, 7];

/// Speeds with a positive y-component (contribute `+` to `u_y`).
pub const NORTH_SPEEDS: [usize; 3] = [2, 5, 6];

/// Speeds with a negative y-component (contribute `−` to `u_y`).
pub const SOUTH_SPEEDS: [usize; 3] = [4, 7, 8];

/// Bounce-back partner table: `OPPOSITE[k]` reverses speed `k`.
const OPPOSITE: [usize; NUM_SPEEDS] = [0, 3, 4, 1, 2, 7, 8, 5, 6];

/// The speed pointing opposite to `k`.
///
/// Used by the bounce-back boundary condition: a population arriving at a
/// solid cell leaves along its reversed direction.
///
/// # Panics
///
/// Panics if `k >= NUM_SPEEDS`.
pub const fn opposite(k: usize) -> usize {
    OPPOSITE[k]
}

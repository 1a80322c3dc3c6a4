//! Inflow acceleration stage.
//!
//! Each timestep, momentum is injected along the row just below the top
//! wall: eastward populations gain a fixed increment and westward
//! populations lose it. A column is skipped when it is obstructed or when
//! the decrement would drive any westward population to zero or below —
//! the guard is evaluated against the pre-update state for the whole row
//! before any plane is touched.

use rayon::prelude::*;
use riffle_core::SimParams;
use riffle_lattice::{DistField, ObstacleMap};

/// Precomputed accelerate-stage constants.
///
/// Derived once by the driver from the immutable parameter bundle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Acceleration {
    /// Target row, `ny − 2`.
    pub row: usize,
    /// Increment for the axis population pair (1, 3): `density·accel / 9`.
    pub delta_axis: f32,
    /// Increment for the diagonal pairs (5, 7) and (8, 6):
    /// `density·accel / 36`.
    pub delta_diag: f32,
}

impl Acceleration {
    /// Derive the stage constants from the parameter bundle.
    pub fn from_params(params: &SimParams) -> Self {
        Self {
            row: params.accel_row(),
            delta_axis: params.density * params.accel / 9.0,
            delta_diag: params.density * params.accel / 36.0,
        }
    }
}

/// Apply the acceleration to `f` in place.
///
/// Mutates only the six moving-population planes on the target row.
pub fn accelerate(f: &mut DistField, obstacles: &ObstacleMap, accel: &Acceleration) {
    let lattice = f.lattice();
    let nx = lattice.nx();
    let n = lattice.cell_count();
    let start = accel.row * nx;

    // Eligibility pass against the pre-update state: decremented
    // populations must remain strictly positive.
    let blocked = &obstacles.as_slice()[start..start + nx];
    let f3 = &f.plane(3)[start..start + nx];
    let f6 = &f.plane(6)[start..start + nx];
    let f7 = &f.plane(7)[start..start + nx];
    let eligible: Vec<bool> = (0..nx)
        .map(|x| {
            !blocked[x]
                && f3[x] - accel.delta_axis > 0.0
                && f6[x] - accel.delta_diag > 0.0
                && f7[x] - accel.delta_diag > 0.0
        })
        .collect();

    f.as_mut_slice()
        .par_chunks_exact_mut(n)
        .enumerate()
        .for_each(|(k, plane)| {
            let delta = match k {
                1 => accel.delta_axis,
                3 => -accel.delta_axis,
                5 | 8 => accel.delta_diag,
                6 | 7 => -accel.delta_diag,
                _ => return,
            };
            let row = &mut plane[start..start + nx];
            for (x, value) in row.iter_mut().enumerate() {
                if eligible[x] {
                    *value += delta;
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use riffle_lattice::Lattice;

    fn lattice() -> Lattice {
        Lattice::new(4, 4).unwrap()
    }

    fn accel() -> Acceleration {
        Acceleration {
            row: 2,
            delta_axis: 0.01,
            delta_diag: 0.0025,
        }
    }

    #[test]
    fn from_params_derives_row_and_deltas() {
        let params = SimParams {
            nx: 8,
            ny: 8,
            max_iters: 1,
            reynolds_dim: 8,
            density: 0.9,
            accel: 0.04,
            omega: 1.0,
        };
        let a = Acceleration::from_params(&params);
        assert_eq!(a.row, 6);
        assert!((a.delta_axis - 0.9 * 0.04 / 9.0).abs() < 1e-7);
        assert!((a.delta_diag - 0.9 * 0.04 / 36.0).abs() < 1e-7);
    }

    #[test]
    fn eligible_columns_shift_mass_eastward() {
        let mut f = DistField::resting(lattice(), 0.9);
        let obstacles = ObstacleMap::open(lattice());
        accelerate(&mut f, &obstacles, &accel());

        let i = lattice().rank(2, 1);
        assert!((f.plane(1)[i] - 0.11).abs() < 1e-6);
        assert!((f.plane(3)[i] - 0.09).abs() < 1e-6);
        assert!((f.plane(5)[i] - 0.0275).abs() < 1e-6);
        assert!((f.plane(8)[i] - 0.0275).abs() < 1e-6);
        assert!((f.plane(6)[i] - 0.0225).abs() < 1e-6);
        assert!((f.plane(7)[i] - 0.0225).abs() < 1e-6);
        // The rest population and the north/south pair are untouched.
        assert!((f.plane(0)[i] - 0.4).abs() < 1e-6);
        assert!((f.plane(2)[i] - 0.1).abs() < 1e-6);
        assert!((f.plane(4)[i] - 0.1).abs() < 1e-6);
    }

    #[test]
    fn acceleration_is_mass_neutral() {
        let mut f = DistField::resting(lattice(), 0.9);
        let total_before = f.total();
        let obstacles = ObstacleMap::open(lattice());
        accelerate(&mut f, &obstacles, &accel());
        assert!((f.total() - total_before).abs() < 1e-5);
    }

    #[test]
    fn other_rows_are_untouched() {
        let mut f = DistField::resting(lattice(), 0.9);
        let obstacles = ObstacleMap::open(lattice());
        accelerate(&mut f, &obstacles, &accel());
        for y in [0, 1, 3] {
            for x in 0..4 {
                let i = lattice().rank(y, x);
                assert!((f.plane(1)[i] - 0.1).abs() < 1e-7, "row {y} col {x}");
                assert!((f.plane(3)[i] - 0.1).abs() < 1e-7, "row {y} col {x}");
            }
        }
    }

    #[test]
    fn blocked_columns_are_skipped() {
        let mut f = DistField::resting(lattice(), 0.9);
        let obstacles = ObstacleMap::from_blocked(lattice(), &[(1, 2)]).unwrap();
        accelerate(&mut f, &obstacles, &accel());

        let blocked_i = lattice().rank(2, 1);
        assert!((f.plane(1)[blocked_i] - 0.1).abs() < 1e-7);
        let open_i = lattice().rank(2, 0);
        assert!((f.plane(1)[open_i] - 0.11).abs() < 1e-6);
    }

    #[test]
    fn guard_is_strict_at_the_boundary() {
        // f[3] exactly equal to the decrement leaves zero, which the
        // strict guard must reject.
        let mut f = DistField::resting(lattice(), 0.9);
        let i = lattice().rank(2, 3);
        for (k, plane) in f.planes_mut().enumerate() {
            if k == 3 {
                plane[i] = 0.01;
            }
        }
        let obstacles = ObstacleMap::open(lattice());
        accelerate(&mut f, &obstacles, &accel());
        assert!((f.plane(3)[i] - 0.01).abs() < 1e-7, "column must be skipped");
        assert!((f.plane(1)[i] - 0.1).abs() < 1e-7);
        // A neighbouring column with healthy populations still updates.
        let j = lattice().rank(2, 0);
        assert!((f.plane(1)[j] - 0.11).abs() < 1e-6);
    }

    #[test]
    fn diagonal_guard_also_skips() {
        let mut f = DistField::resting(lattice(), 0.9);
        let i = lattice().rank(2, 2);
        for (k, plane) in f.planes_mut().enumerate() {
            if k == 7 {
                plane[i] = 0.002;
            }
        }
        let obstacles = ObstacleMap::open(lattice());
        accelerate(&mut f, &obstacles, &accel());
        assert!((f.plane(7)[i] - 0.002).abs() < 1e-7);
        assert!((f.plane(1)[i] - 0.1).abs() < 1e-7);
    }

    #[test]
    fn westward_populations_stay_positive() {
        // Post-condition over repeated application: the guard keeps every
        // decremented population strictly positive no matter how often the
        // stage runs.
        let mut f = DistField::resting(lattice(), 0.9);
        let obstacles = ObstacleMap::open(lattice());
        for _ in 0..200 {
            accelerate(&mut f, &obstacles, &accel());
        }
        let start = 2 * 4;
        for x in 0..4 {
            assert!(f.plane(3)[start + x] > 0.0);
            assert!(f.plane(6)[start + x] > 0.0);
            assert!(f.plane(7)[start + x] > 0.0);
        }
    }
}

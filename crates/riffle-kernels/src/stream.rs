//! Streaming stage: advection plus the macroscopic moment pass.
//!
//! Pull model: every cell of `f'` fetches the population that was moving
//! toward it, so each output plane reads only the matching input plane and
//! the planes parallelise without coordination. Both axes wrap.
//!
//! After the advection completes, a second row-parallel pass derives
//! `(ρ, u_x, u_y)` for every cell from the fresh `f'` into the moment
//! scratch. The pass is branchless; scratch entries at solid cells are
//! meaningless and must not be read.

use rayon::prelude::*;
use riffle_lattice::{cell_moments, DistField, Lattice, MomentScratch};

/// Rank of the cell that speed `k` at `(y, x)` pulls from.
///
/// The source is the neighbour the speed vector points away from:
/// `source = (y, x) − e_k` under periodic wrap.
fn source_rank(lattice: Lattice, k: usize, y: usize, x: usize) -> usize {
    let yn = lattice.north(y);
    let ys = lattice.south(y);
    let xe = lattice.east(x);
    let xw = lattice.west(x);
    match k {
        0 => lattice.rank(y, x),
        1 => lattice.rank(y, xw),
        2 => lattice.rank(ys, x),
        3 => lattice.rank(y, xe),
        4 => lattice.rank(yn, x),
        5 => lattice.rank(ys, xw),
        6 => lattice.rank(ys, xe),
        7 => lattice.rank(yn, xe),
        _ => lattice.rank(yn, xw),
    }
}

/// Stream `f` into `out` and cache the post-streaming moments.
///
/// Every cell is streamed, solid and fluid alike; bounce-back happens in
/// the collision stage from the streamed values.
pub fn stream(f: &DistField, out: &mut DistField, moments: &mut MomentScratch) {
    let lattice = f.lattice();
    let nx = lattice.nx();
    let n = lattice.cell_count();

    out.as_mut_slice()
        .par_chunks_exact_mut(n)
        .enumerate()
        .for_each(|(k, out_plane)| {
            let src = f.plane(k);
            out_plane
                .par_chunks_exact_mut(nx)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, value) in row.iter_mut().enumerate() {
                        *value = src[source_rank(lattice, k, y, x)];
                    }
                });
        });

    let post: &DistField = out;
    let (rho, ux, uy) = moments.slices_mut();
    rho.par_chunks_exact_mut(nx)
        .zip(ux.par_chunks_exact_mut(nx))
        .zip(uy.par_chunks_exact_mut(nx))
        .enumerate()
        .for_each(|(y, ((rho_row, ux_row), uy_row))| {
            for x in 0..nx {
                let m = cell_moments(post, lattice.rank(y, x));
                rho_row[x] = m.rho;
                ux_row[x] = m.ux;
                uy_row[x] = m.uy;
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use riffle_core::{EX, EY, NUM_SPEEDS};

    fn lattice() -> Lattice {
        Lattice::new(4, 3).unwrap()
    }

    fn stream_once(f: &DistField) -> (DistField, MomentScratch) {
        let mut out = DistField::zeroed(f.lattice());
        let mut moments = MomentScratch::new(f.cell_count());
        stream(f, &mut out, &mut moments);
        (out, moments)
    }

    #[test]
    fn each_speed_advects_along_its_vector() {
        // A marked population at (1, 1) must land one step along e_k.
        let l = lattice();
        for k in 0..NUM_SPEEDS {
            let mut f = DistField::zeroed(l);
            for (plane_k, plane) in f.planes_mut().enumerate() {
                if plane_k == k {
                    plane[l.rank(1, 1)] = 1.0;
                }
            }
            let (out, _) = stream_once(&f);
            let dest_y = (1 + EY[k] as i64).rem_euclid(3) as usize;
            let dest_x = (1 + EX[k] as i64).rem_euclid(4) as usize;
            assert_eq!(
                out.plane(k)[l.rank(dest_y, dest_x)],
                1.0,
                "speed {k} should land at ({dest_y}, {dest_x})"
            );
            // Exactly one nonzero entry in the plane.
            let nonzero = out.plane(k).iter().filter(|&&v| v != 0.0).count();
            assert_eq!(nonzero, 1, "speed {k}");
        }
    }

    #[test]
    fn advection_wraps_both_axes() {
        let l = lattice();
        let mut f = DistField::zeroed(l);
        // Speed 5 = (+x, +y) from the far corner wraps to the origin.
        for (k, plane) in f.planes_mut().enumerate() {
            if k == 5 {
                plane[l.rank(2, 3)] = 2.5;
            }
        }
        let (out, _) = stream_once(&f);
        assert_eq!(out.plane(5)[l.rank(0, 0)], 2.5);
    }

    #[test]
    fn resting_state_is_a_streaming_fixed_point() {
        let f = DistField::resting(lattice(), 0.1);
        let (out, moments) = stream_once(&f);
        assert_eq!(out, f);
        for i in 0..f.cell_count() {
            assert!((moments.rho()[i] - 0.1).abs() < 1e-6);
            assert_eq!(moments.ux()[i], 0.0);
            assert_eq!(moments.uy()[i], 0.0);
        }
    }

    #[test]
    fn moments_reflect_the_streamed_buffer() {
        let l = lattice();
        let mut f = DistField::resting(l, 0.1);
        // Perturb an eastward population; after streaming the excess sits
        // one column east and the cached moments must see it there.
        for (k, plane) in f.planes_mut().enumerate() {
            if k == 1 {
                plane[l.rank(1, 1)] += 0.05;
            }
        }
        let (out, moments) = stream_once(&f);
        let dest = l.rank(1, 2);
        let expected = cell_moments(&out, dest);
        assert!((moments.rho()[dest] - expected.rho).abs() < 1e-7);
        assert!((moments.ux()[dest] - expected.ux).abs() < 1e-7);
        assert!(moments.ux()[dest] > 0.0);
    }

    proptest! {
        #[test]
        fn streaming_permutes_each_plane(values in proptest::collection::vec(0.0f32..1.0, 12)) {
            // Advection moves populations without creating or destroying
            // mass: each plane of the output is a permutation of the input.
            let l = lattice();
            let mut f = DistField::zeroed(l);
            for plane in f.planes_mut() {
                plane.copy_from_slice(&values);
            }
            let (out, _) = stream_once(&f);
            for k in 0..NUM_SPEEDS {
                let mut before: Vec<f32> = f.plane(k).to_vec();
                let mut after: Vec<f32> = out.plane(k).to_vec();
                before.sort_by(f32::total_cmp);
                after.sort_by(f32::total_cmp);
                prop_assert_eq!(before, after, "plane {} not a permutation", k);
            }
        }
    }
}

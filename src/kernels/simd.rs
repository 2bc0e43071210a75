//! SIMD butterfly kernels
//!
//! Two complex butterflies are computed per `f64x4` operation, over the interleaved
//! `[re0, im0, re1, im1]` view described in [`crate::utils`].
//!
//! For `x = a + bi` and `w = c + di`, the product `x·w = (ac - bd) + (ad + bc)i` is computed as
//! `[a, b]·[c, c] + [-1, 1]·([b, a]·[d, d])`. Negation and the commutative add are exact, so every
//! lane holds exactly the value the scalar kernel computes.
use num_complex::Complex64;
use wide::f64x4;

use crate::kernels::{butterfly_span_2, debug_check_chunk};
use crate::kernels::scalar::butterfly_block;
use crate::stage::StageDescriptor;
use crate::twiddles::TwiddleTable;
use crate::utils::{as_lane_quads, as_lane_quads_mut};

/// Complex numbers per vector
const PAIR: usize = 2;

/// SIMD DIT butterfly for one stage over a chunk of whole blocks
#[multiversion::multiversion(targets(
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub fn butterfly_chunk_simd(
    r: &[Complex64],
    t: &mut [Complex64],
    twiddles: &TwiddleTable,
    desc: StageDescriptor,
) {
    debug_check_chunk(r, t, twiddles, desc);

    if desc.stage == 2 {
        butterfly_span_2(r, t);
        return;
    }

    let half = desc.half;
    let stride = desc.blocks;
    let vectorized = half - half % PAIR;
    let sign = f64x4::new([-1.0, 1.0, -1.0, 1.0]);

    r.chunks_exact(desc.stage)
        .zip(t.chunks_exact_mut(desc.stage))
        .for_each(|(r_block, t_block)| {
            let (r_lo, r_hi) = r_block.split_at(half);
            let (t_lo, t_hi) = t_block.split_at_mut(half);

            as_lane_quads(&r_lo[..vectorized])
                .iter()
                .zip(as_lane_quads(&r_hi[..vectorized]).iter())
                .zip(as_lane_quads_mut(&mut t_lo[..vectorized]).iter_mut())
                .zip(as_lane_quads_mut(&mut t_hi[..vectorized]).iter_mut())
                .enumerate()
                .for_each(|(k, (((in_lo, in_hi), out_lo), out_hi))| {
                    let w0 = twiddles.get(stride, PAIR * k);
                    let w1 = twiddles.get(stride, PAIR * k + 1);

                    let tw_re = f64x4::new([w0.re, w0.re, w1.re, w1.re]);
                    let tw_im = f64x4::new([w0.im, w0.im, w1.im, w1.im]);

                    let z0 = f64x4::new(*in_lo);
                    let z1 = f64x4::new(*in_hi);
                    let z1_swapped = f64x4::new([in_hi[1], in_hi[0], in_hi[3], in_hi[2]]);

                    let wn = z1 * tw_re + sign * (z1_swapped * tw_im);

                    *out_lo = (z0 + wn).to_array();
                    *out_hi = (z0 - wn).to_array();
                });

            // Remainder too small for the vectorized loop
            butterfly_block(r_lo, r_hi, t_lo, t_hi, twiddles, stride, vectorized);
        });
}

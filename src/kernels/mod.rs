//! FFT Butterfly Kernels
//!
//! This module contains the butterfly kernels that compute one radix-2 stage of the
//! decimation-in-time FFT. Every kernel works on a chunk of whole blocks: it reads the chunk of
//! the previous stage's output `r` and fully overwrites the matching chunk of `t`.
//!
//! ## Organization
//!
//! - `scalar`: one complex butterfly at a time; the reference, available everywhere
//! - `simd`: two complex butterflies per `f64x4`; bit-identical to `scalar`

use num_complex::Complex64;

use crate::stage::StageDescriptor;
use crate::twiddles::TwiddleTable;

pub mod scalar;
pub mod simd;

/// Checks that `r` and `t` are matching windows of whole blocks of `desc`, and that `twiddles`
/// belongs to the same transform length.
#[inline]
pub(crate) fn debug_check_chunk(
    r: &[Complex64],
    t: &[Complex64],
    twiddles: &TwiddleTable,
    desc: StageDescriptor,
) {
    debug_assert_eq!(r.len(), t.len());
    debug_assert_eq!(r.len() % desc.stage, 0);
    debug_assert!(r.len() <= desc.transform_len());
    debug_assert_eq!(twiddles.len() * 2, desc.transform_len());
}

/// Butterfly for stage == 2. No twiddle multiply is needed, since `w = 1` for every pair.
#[inline]
pub fn butterfly_span_2(r: &[Complex64], t: &mut [Complex64]) {
    debug_assert_eq!(r.len(), t.len());
    debug_assert_eq!(r.len() % 2, 0);

    r.chunks_exact(2)
        .zip(t.chunks_exact_mut(2))
        .for_each(|(r_pair, t_pair)| {
            let z0 = r_pair[0];
            let z1 = r_pair[1];
            t_pair[0] = z0 + z1;
            t_pair[1] = z0 - z1;
        });
}

/// Computes one stage over a chunk of whole blocks, choosing the inner loop by `use_simd`.
///
/// `r` and `t` are the same `[start, end)` window of the input and output buffers.
pub fn execute_stage(
    r: &[Complex64],
    t: &mut [Complex64],
    twiddles: &TwiddleTable,
    desc: StageDescriptor,
    use_simd: bool,
) {
    if use_simd {
        simd::butterfly_chunk_simd(r, t, twiddles, desc);
    } else {
        scalar::butterfly_chunk_scalar(r, t, twiddles, desc);
    }
}

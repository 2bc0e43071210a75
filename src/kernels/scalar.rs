//! Scalar butterfly kernels
use num_complex::Complex64;

use crate::kernels::{butterfly_span_2, debug_check_chunk};
use crate::stage::StageDescriptor;
use crate::twiddles::TwiddleTable;

/// Runs the butterflies `j` in `from..lo.len()` of one block.
///
/// `r_lo`/`r_hi` are the two halves of the block in the input buffer, `t_lo`/`t_hi` in the
/// output buffer. For each `j`, `wn = r_hi[j] * w_j` and the pair becomes `(r_lo[j] ± wn)`.
#[inline]
pub(crate) fn butterfly_block(
    r_lo: &[Complex64],
    r_hi: &[Complex64],
    t_lo: &mut [Complex64],
    t_hi: &mut [Complex64],
    twiddles: &TwiddleTable,
    stride: usize,
    from: usize,
) {
    for j in from..r_lo.len() {
        let w = twiddles.get(stride, j);
        let z0 = r_lo[j];
        let wn = r_hi[j] * w;
        t_lo[j] = z0 + wn;
        t_hi[j] = z0 - wn;
    }
}

/// Scalar DIT butterfly for one stage over a chunk of whole blocks
#[multiversion::multiversion(targets(
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub fn butterfly_chunk_scalar(
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

    r.chunks_exact(desc.stage)
        .zip(t.chunks_exact_mut(desc.stage))
        .for_each(|(r_block, t_block)| {
            let (r_lo, r_hi) = r_block.split_at(desc.half);
            let (t_lo, t_hi) = t_block.split_at_mut(desc.half);
            butterfly_block(r_lo, r_hi, t_lo, t_hi, twiddles, desc.blocks, 0);
        });
}

//! Utilities for parallelism
//!
//! A stage is split into contiguous chunks of whole blocks. Butterflies never cross a block
//! boundary, so a chunk reads only its own window of `r` and writes only its own window of `t`.
//! Chunks can therefore run in any order, on any thread, without locks. Returning from
//! [`run_stage`] is the barrier between stages.
use std::ops::Range;

use num_complex::Complex64;

use crate::kernels::execute_stage;
use crate::stage::StageDescriptor;
use crate::twiddles::TwiddleTable;

/// A contiguous range `[start, end)` of buffer indices handled by one execution unit.
///
/// Both bounds are multiples of the stage span.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WorkChunk {
    pub start: usize,
    pub end: usize,
}

impl WorkChunk {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Splits the `n / stage` blocks of a stage into at most `parallelism` contiguous chunks.
///
/// Returns `min(parallelism, n / stage)` chunks, and always at least one. Block counts differ by
/// at most one between chunks, with the larger chunks first.
pub fn partition(n: usize, stage: usize, parallelism: usize) -> Vec<WorkChunk> {
    debug_assert!(stage >= 1 && n % stage == 0);
    let blocks = n / stage;
    let units = parallelism.clamp(1, blocks.max(1));
    let per_unit = blocks / units;
    let extra = blocks % units;

    let mut start = 0;
    (0..units)
        .map(|unit| {
            let num_blocks = per_unit + usize::from(unit < extra);
            let end = start + num_blocks * stage;
            let chunk = WorkChunk { start, end };
            start = end;
            chunk
        })
        .collect()
}

/// Computes stage `desc` from `r` into `t`, splitting the work into `parallelism` chunks.
///
/// Every chunk has finished writing `t` when this returns.
pub fn run_stage(
    r: &[Complex64],
    t: &mut [Complex64],
    twiddles: &TwiddleTable,
    desc: StageDescriptor,
    parallelism: usize,
    use_simd: bool,
) {
    assert_eq!(r.len(), t.len());
    let chunks = partition(r.len(), desc.stage, parallelism);
    log::trace!(
        "stage {} over {} chunk(s), simd: {use_simd}",
        desc.stage,
        chunks.len()
    );

    if chunks.len() == 1 {
        execute_stage(r, t, twiddles, desc, use_simd);
        return;
    }

    let work = split_chunks(t, &chunks);
    dispatch(work, |chunk, t_chunk| {
        execute_stage(&r[chunk.range()], t_chunk, twiddles, desc, use_simd)
    });
}

/// Hands out one exclusive `t` window per chunk.
fn split_chunks<'a>(
    mut t: &'a mut [Complex64],
    chunks: &[WorkChunk],
) -> Vec<(WorkChunk, &'a mut [Complex64])> {
    let mut work = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let (head, tail) = std::mem::take(&mut t).split_at_mut(chunk.len());
        work.push((*chunk, head));
        t = tail;
    }
    debug_assert!(t.is_empty());
    work
}

#[cfg(feature = "parallel")]
fn dispatch<F>(work: Vec<(WorkChunk, &mut [Complex64])>, oper: F)
where
    F: Fn(WorkChunk, &mut [Complex64]) + Sync + Send,
{
    use rayon::prelude::*;

    work.into_par_iter()
        .for_each(|(chunk, t_chunk)| oper(chunk, t_chunk));
}

#[cfg(not(feature = "parallel"))]
fn dispatch<F>(work: Vec<(WorkChunk, &mut [Complex64])>, oper: F)
where
    F: Fn(WorkChunk, &mut [Complex64]),
{
    work.into_iter()
        .for_each(|(chunk, t_chunk)| oper(chunk, t_chunk));
}

/// The parameters of one radix-2 stage of a length-`n` transform.
///
/// A stage combines pairs of sub-transforms of length `half` into transforms of length `stage`.
/// The buffer is split into `blocks` independent blocks of `stage` elements, and the stage reads
/// every `blocks`-th twiddle factor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StageDescriptor {
    /// Butterfly span, a power of two in `2..=n`
    pub stage: usize,
    /// `stage / 2`
    pub half: usize,
    /// `n / stage`, which is also the stride into the twiddle table
    pub blocks: usize,
}

impl StageDescriptor {
    /// # Panics
    ///
    /// Panics if `stage` is not a power of two in `2..=n`
    pub fn new(n: usize, stage: usize) -> Self {
        assert!(stage >= 2 && stage <= n && stage.is_power_of_two());
        Self {
            stage,
            half: stage >> 1,
            blocks: n / stage,
        }
    }

    /// Total transform length this stage belongs to
    #[inline]
    pub fn transform_len(&self) -> usize {
        self.stage * self.blocks
    }

    /// All stages of a length-`n` transform, smallest span first.
    ///
    /// Yields nothing for `n == 1`.
    pub fn all(n: usize) -> impl Iterator<Item = StageDescriptor> {
        debug_assert!(n.is_power_of_two());
        let log_n = n.ilog2();
        (1..=log_n).map(move |k| StageDescriptor::new(n, 1 << k))
    }
}

use std::f64::consts::PI;
use std::ops::Index;

use num_complex::Complex64;

use crate::error::{validate_len, FftError};
use crate::planner::Direction;

/// The `N/2` roots of unity used by every stage of a length-`N` transform.
///
/// Entry `k` is `e^{-2πik/N}` for [`Direction::Forward`], and its conjugate for
/// [`Direction::Reverse`]. A stage of span `s` reads every `N/s`-th entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TwiddleTable {
    factors: Vec<Complex64>,
}

impl TwiddleTable {
    /// Builds the table for a transform of `n` points.
    pub fn new(n: usize, direction: Direction) -> Result<Self, FftError> {
        Ok(Self {
            factors: generate_twiddles(n, direction)?,
        })
    }

    /// Number of entries, i.e. `N/2`
    #[inline]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// The `j`-th twiddle of a stage that reads every `stride`-th entry
    #[inline]
    pub fn get(&self, stride: usize, j: usize) -> Complex64 {
        debug_assert!(stride * j < self.factors.len());
        self.factors[stride * j]
    }

    pub fn as_slice(&self) -> &[Complex64] {
        &self.factors
    }
}

impl Index<usize> for TwiddleTable {
    type Output = Complex64;

    fn index(&self, k: usize) -> &Complex64 {
        &self.factors[k]
    }
}

/// Generates the twiddle factors `w[k] = cos(2πk/n) ∓ i·sin(2πk/n)` for `k` in `0..n/2`.
///
/// Every entry is computed from its own angle rather than by repeated rotation, so errors do not
/// accumulate along the table.
pub(crate) fn generate_twiddles(n: usize, direction: Direction) -> Result<Vec<Complex64>, FftError> {
    validate_len(n).map_err(|_| FftError::InvalidLength { len: n })?;

    let sign = match direction {
        Direction::Forward => -1.0,
        Direction::Reverse => 1.0,
    };
    let step = 2.0 * PI / n as f64;

    Ok((0..n / 2)
        .map(|k| {
            let (sin, cos) = (step * k as f64).sin_cos();
            Complex64::new(cos, sign * sin)
        })
        .collect())
}

//! The planner module provides a convenient interface for planning and executing
//! a Fast Fourier Transform (FFT). Currently, the planner is responsible for
//! pre-computing twiddle factors based on the input signal length, as well as the
//! direction of the FFT.
use crate::error::{validate_len, FftError};
use crate::twiddles::TwiddleTable;

/// Reverse is for running the Inverse Fast Fourier Transform (IFFT)
/// Forward is for running the regular FFT
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Use the `e^{-2πi·kn/N}` kernel
    Forward,
    /// Use the conjugate kernel and scale the result by `1/N`
    Reverse,
}

/// The planner is responsible for pre-computing and storing twiddle factors for all the
/// `log_2(N)` stages of the FFT.
/// The amount of twiddle factors is always `(1/2) * N`. A plan can be reused for any number
/// of transforms of the same length and direction, from any number of threads.
#[derive(Debug, Clone)]
pub struct Planner64 {
    /// The twiddle factors shared by every stage
    pub twiddles: TwiddleTable,
    /// The direction of the FFT associated with this `Planner`
    pub direction: Direction,
    /// The log2 of the FFT size
    pub log_n: usize,
}

impl Planner64 {
    /// Create a `Planner` for an FFT of size `num_points`.
    /// The twiddle factors are pre-computed based on the provided [`Direction`].
    ///
    /// # Errors
    ///
    /// Fails if `num_points` is 0 or not a power of 2.
    pub fn new(num_points: usize, direction: Direction) -> Result<Self, FftError> {
        let log_n = validate_len(num_points)?;
        let twiddles = TwiddleTable::new(num_points, direction)?;
        log::debug!("planned {direction:?} FFT of {num_points} points");

        Ok(Self {
            twiddles,
            direction,
            log_n,
        })
    }

    /// The transform length this plan was built for
    #[inline]
    pub fn num_points(&self) -> usize {
        1 << self.log_n
    }
}

//! Errors reported by the transform entry points
use thiserror::Error;

/// Everything that can go wrong before a transform starts.
///
/// Validation happens once, at the entry point, before any buffer is allocated. Once a transform
/// is running it cannot fail, so a caller never observes a partially computed result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The input sequence has no elements
    #[error("input sequence is empty")]
    EmptyInput,

    /// The input length is not a power of two
    #[error("input length {len} is not a power of two")]
    InvalidLength { len: usize },

    /// The planner was built for a different transform length than the signal's
    #[error("planner was built for length {plan}, but the signal has length {signal}")]
    PlanLengthMismatch { plan: usize, signal: usize },

    /// Split real/imaginary buffers differ in length
    #[error("real and imaginary components differ in length ({reals} vs {imags})")]
    MismatchedComponents { reals: usize, imags: usize },
}

/// Checks that `len` is a valid radix-2 transform length and returns `log2(len)`.
pub(crate) fn validate_len(len: usize) -> Result<usize, FftError> {
    if len == 0 {
        return Err(FftError::EmptyInput);
    }
    if !len.is_power_of_two() {
        return Err(FftError::InvalidLength { len });
    }
    Ok(len.ilog2() as usize)
}

//! Bit reversal permutation
//!
//! The iterative decimation-in-time FFT expects its input in bit-reversed index order: the element
//! at index `i` of the working buffer is the input element at index `rev(i)`, where `rev` reverses
//! the low `log2(N)` bits of `i`. Reversing twice gives back `i`, so the permutation is its own
//! inverse.

use crate::error::{validate_len, FftError};

/// Reverses the low `log_n` bits of `i`.
///
/// `i` must be less than `2^log_n`.
#[inline]
pub fn reverse_bits(i: usize, log_n: usize) -> usize {
    debug_assert!(log_n == usize::BITS as usize || i < (1 << log_n));
    if log_n == 0 {
        return 0;
    }
    i.reverse_bits() >> (usize::BITS as usize - log_n)
}

/// Returns a copy of `input` in bit-reversed order.
///
/// # Errors
///
/// Fails if `input` is empty or its length is not a power of two.
pub fn bit_reverse_permutation<T: Copy>(input: &[T]) -> Result<Vec<T>, FftError> {
    let log_n = validate_len(input.len())?;

    Ok((0..input.len())
        .map(|i| input[reverse_bits(i, log_n)])
        .collect())
}

/// Permutes `buf` into bit-reversed order in place.
///
/// Each pair `(i, rev(i))` with `i < rev(i)` is swapped exactly once.
///
/// # Panics
///
/// Panics if `buf.len() != 2^log_n`
pub fn bit_reverse_in_place<T>(buf: &mut [T], log_n: usize) {
    assert_eq!(buf.len(), 1 << log_n);

    for i in 0..buf.len() {
        let j = reverse_bits(i, log_n);
        if i < j {
            buf.swap(i, j);
        }
    }
}

//! Utility functions such as interleave/deinterleave
//!
//! ## Layout contract
//!
//! [`Complex64`] is `#[repr(C)]` with `re` followed by `im`, so a `&[Complex64]` of length `n` is
//! the same memory as `2n` interleaved `f64`s: `[re0, im0, re1, im1, ...]`. num-complex implements
//! `bytemuck::Pod` for `Complex<f64>`, which checks that at compile time, and `bytemuck`'s casts
//! check length and alignment at runtime. Vector kernels reinterpret buffers only through the
//! helpers below, never through pointer casts.

use bytemuck::{cast_slice, cast_slice_mut};
use num_complex::Complex64;

/// Views a complex signal as interleaved `[re, im]` pairs of `f64`s.
pub fn as_interleaved(signal: &[Complex64]) -> &[f64] {
    cast_slice(signal)
}

/// Mutable version of [`as_interleaved`]
pub fn as_interleaved_mut(signal: &mut [Complex64]) -> &mut [f64] {
    cast_slice_mut(signal)
}

/// Views a complex signal as groups of two adjacent complex numbers, i.e. 4 lanes of `f64`
/// laid out as `[re0, im0, re1, im1]`.
///
/// # Panics
///
/// Panics if `signal.len()` is odd
#[inline]
pub(crate) fn as_lane_quads(signal: &[Complex64]) -> &[[f64; 4]] {
    cast_slice(as_interleaved(signal))
}

/// Mutable version of [`as_lane_quads`]
///
/// # Panics
///
/// Panics if `signal.len()` is odd
#[inline]
pub(crate) fn as_lane_quads_mut(signal: &mut [Complex64]) -> &mut [[f64; 4]] {
    cast_slice_mut(as_interleaved_mut(signal))
}

/// Utility function to combine separate slices of real and imaginary components
/// into a single vector of Complex Number Structs.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`.
pub fn combine_re_im(reals: &[f64], imags: &[f64]) -> Vec<Complex64> {
    assert_eq!(reals.len(), imags.len());

    reals
        .iter()
        .zip(imags.iter())
        .map(|(z_re, z_im)| Complex64::new(*z_re, *z_im))
        .collect()
}

/// Writes the components of `signal` back into separate real and imaginary slices.
///
/// # Panics
///
/// Panics if the three slices differ in length.
pub fn separate_re_im(signal: &[Complex64], reals: &mut [f64], imags: &mut [f64]) {
    assert_eq!(signal.len(), reals.len());
    assert_eq!(signal.len(), imags.len());

    signal
        .iter()
        .zip(reals.iter_mut().zip(imags.iter_mut()))
        .for_each(|(z, (z_re, z_im))| {
            *z_re = z.re;
            *z_im = z.im;
        });
}

/// Extends a real signal into a complex one with zero imaginary parts
pub fn real_to_complex(reals: &[f64]) -> Vec<Complex64> {
    reals.iter().map(|&re| Complex64::new(re, 0.0)).collect()
}

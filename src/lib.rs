//! An iterative radix-2 Cooley–Tukey FFT over `f64` complex numbers.
//!
//! The input is permuted into bit-reversed order, then `log2(N)` decimation-in-time stages of
//! span `2, 4, ..., N` are run, ping-ponging between two buffers. Each stage can be split into
//! chunks of whole blocks and computed on several threads, and each butterfly loop has a SIMD
//! variant that gives bit-identical results to the scalar one.
//!
//! ```
//! use num_complex::Complex64;
//! use radix2fft::fft_64;
//!
//! let signal: Vec<Complex64> = [1.0, 2.0, 3.0, 4.0]
//!     .iter()
//!     .map(|&re| Complex64::new(re, 0.0))
//!     .collect();
//! let spectrum = fft_64(&signal).unwrap();
//! assert!((spectrum[0].re - 10.0).abs() < 1e-12);
//! ```
//!
//! Only power-of-two lengths are supported.

pub mod bit_reverse;
pub mod error;
mod fft;
pub mod kernels;
pub mod options;
pub mod parallel;
pub mod planner;
pub mod stage;
pub mod twiddles;
pub mod utils;

pub use crate::error::FftError;
pub use crate::fft::{
    fft_64, fft_64_in_place, fft_64_re_im, fft_64_with_opts_and_plan, fft_real_64, ifft_64,
};
pub use crate::options::{Kernel, Options};
pub use crate::planner::{Direction, Planner64};

pub extern crate rustfft;

// export rustfft to radix2fft
use rand::{distributions::Uniform, prelude::*, rngs::StdRng};
use rustfft::num_complex::Complex64;
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that two complex signals are element-wise approximately equal.
///
/// # Panics
///
/// Panics if the signals differ in length, or if any pair of components is too far apart
#[track_caller]
pub fn assert_signal_closeness(actual: &[Complex64], expected: &[Complex64], epsilon: f64) {
    assert_eq!(actual.len(), expected.len(), "signal lengths differ");
    for (z, w) in actual.iter().zip(expected.iter()) {
        assert_float_closeness(z.re, w.re, epsilon);
        assert_float_closeness(z.im, w.im, epsilon);
    }
}

/// Generate a random complex signal of length `len`, with both components drawn from `[-1, 1)`.
///
/// The generator is seeded, so repeated calls with the same `seed` produce the same signal.
pub fn gen_random_signal(len: usize, seed: u64) -> Vec<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let uniform_dist = Uniform::new(-1.0, 1.0);

    (0..len)
        .map(|_| Complex64::new(uniform_dist.sample(&mut rng), uniform_dist.sample(&mut rng)))
        .collect()
}

/// Computes the forward FFT of `signal` with rustfft, for cross-checking
pub fn reference_fft(signal: &[Complex64]) -> Vec<Complex64> {
    let mut buffer = signal.to_vec();
    let mut planner = rustfft::FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}

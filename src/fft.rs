//! Decimation-in-Time (DIT) FFT Driver
//!
//! 1. Validate the input length
//! 2. Copy the input into a working buffer in bit-reversed order
//! 3. Run stages of span `2, 4, ..., N`, each reading one buffer and writing the other
//! 4. For the inverse transform, scale by `1/N`
//!
//! The output is in natural order.
use num_complex::Complex64;
use num_traits::Zero;

use crate::bit_reverse::bit_reverse_permutation;
use crate::error::{validate_len, FftError};
use crate::options::Options;
use crate::parallel::run_stage;
use crate::planner::{Direction, Planner64};
use crate::stage::StageDescriptor;

/// Computes the FFT of `signal` with the given options and plan.
///
/// # Errors
///
/// Fails with [`FftError::EmptyInput`] or [`FftError::InvalidLength`] if `signal` is not a
/// valid radix-2 length, and with [`FftError::PlanLengthMismatch`] if `planner` was built for
/// another length. Nothing is computed in either case.
pub fn fft_64_with_opts_and_plan(
    signal: &[Complex64],
    opts: &Options,
    planner: &Planner64,
) -> Result<Vec<Complex64>, FftError> {
    let n = signal.len();
    validate_len(n)?;
    if planner.num_points() != n {
        return Err(FftError::PlanLengthMismatch {
            plan: planner.num_points(),
            signal: n,
        });
    }

    let use_simd = opts.use_simd(n);
    log::debug!(
        "running {:?} FFT of {n} points (simd: {use_simd}, parallelism: {})",
        planner.direction,
        opts.parallelism
    );

    let mut r = bit_reverse_permutation(signal)?;
    if n == 1 {
        return Ok(r);
    }
    let mut t = vec![Complex64::zero(); n];

    for desc in StageDescriptor::all(n) {
        run_stage(&r, &mut t, &planner.twiddles, desc, opts.parallelism, use_simd);
        std::mem::swap(&mut r, &mut t);
    }

    if planner.direction == Direction::Reverse {
        let scale = 1.0 / n as f64;
        r.iter_mut().for_each(|z| *z = z.scale(scale));
    }

    Ok(r)
}

/// Computes the FFT of `signal` in place, with the given options and plan.
///
/// On error `signal` is left untouched.
pub fn fft_64_in_place(
    signal: &mut [Complex64],
    opts: &Options,
    planner: &Planner64,
) -> Result<(), FftError> {
    let spectrum = fft_64_with_opts_and_plan(signal, opts, planner)?;
    signal.copy_from_slice(&spectrum);
    Ok(())
}

/// Computes the forward FFT of `signal`.
///
/// Options are guessed from the input size and the current CPU, and the plan is built for this
/// call only. Use [`fft_64_with_opts_and_plan`] to reuse a plan across calls.
pub fn fft_64(signal: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
    transform_oneshot(signal, Direction::Forward)
}

/// Computes the inverse FFT of `spectrum`, including the `1/N` scaling.
pub fn ifft_64(spectrum: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
    transform_oneshot(spectrum, Direction::Reverse)
}

/// Computes the forward FFT of a real signal, treating every imaginary part as zero.
pub fn fft_real_64(signal: &[f64]) -> Result<Vec<Complex64>, FftError> {
    validate_len(signal.len())?;
    fft_64(&crate::utils::real_to_complex(signal))
}

/// FFT over separate real and imaginary buffers, overwritten with the result.
///
/// # Errors
///
/// Fails with [`FftError::MismatchedComponents`] if `reals.len() != imags.len()`, and otherwise
/// as [`fft_64_with_opts_and_plan`] does.
pub fn fft_64_re_im(
    reals: &mut [f64],
    imags: &mut [f64],
    direction: Direction,
) -> Result<(), FftError> {
    if reals.len() != imags.len() {
        return Err(FftError::MismatchedComponents {
            reals: reals.len(),
            imags: imags.len(),
        });
    }
    validate_len(reals.len())?;

    let signal = crate::utils::combine_re_im(reals, imags);
    let result = transform_oneshot(&signal, direction)?;
    crate::utils::separate_re_im(&result, reals, imags);
    Ok(())
}

fn transform_oneshot(
    signal: &[Complex64],
    direction: Direction,
) -> Result<Vec<Complex64>, FftError> {
    validate_len(signal.len())?;
    let opts = Options::guess_options(signal.len());
    let planner = Planner64::new(signal.len(), direction)?;
    fft_64_with_opts_and_plan(signal, &opts, &planner)
}

#[cfg(test)]
mod tests {
    use utilities::{assert_float_closeness, assert_signal_closeness, gen_random_signal, reference_fft};

    use super::*;
    use crate::options::Kernel;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn reals(values: &[f64]) -> Vec<Complex64> {
        values.iter().map(|&re| c(re, 0.0)).collect()
    }

    fn forward(signal: &[Complex64], opts: &Options) -> Vec<Complex64> {
        let planner = Planner64::new(signal.len(), Direction::Forward).unwrap();
        fft_64_with_opts_and_plan(signal, opts, &planner).unwrap()
    }

    #[test]
    fn fft_1_2_3_4() {
        let spectrum = fft_64(&reals(&[1.0, 2.0, 3.0, 4.0])).unwrap();
        assert_signal_closeness(
            &spectrum,
            &[c(10.0, 0.0), c(-2.0, 2.0), c(-2.0, 0.0), c(-2.0, -2.0)],
            1e-12,
        );
    }

    #[test]
    fn fft_two_points() {
        let spectrum = fft_64(&reals(&[1.0, 0.0])).unwrap();
        assert_eq!(spectrum, vec![c(1.0, 0.0), c(1.0, 0.0)]);
    }

    #[test]
    fn fft_of_zeros() {
        let spectrum = fft_64(&reals(&[0.0; 4])).unwrap();
        assert_eq!(spectrum, reals(&[0.0; 4]));
    }

    #[test]
    fn fft_single_point_is_identity() {
        let signal = vec![c(3.5, -1.25)];
        assert_eq!(fft_64(&signal).unwrap(), signal);
        assert_eq!(ifft_64(&signal).unwrap(), signal);
    }

    #[test]
    fn fft_rejects_invalid_lengths() {
        assert_eq!(fft_64(&[]), Err(FftError::EmptyInput));
        assert_eq!(
            fft_64(&reals(&[1.0, 2.0, 3.0])),
            Err(FftError::InvalidLength { len: 3 })
        );
        assert_eq!(
            fft_64(&reals(&[1.0; 5])),
            Err(FftError::InvalidLength { len: 5 })
        );
        assert_eq!(fft_real_64(&[1.0; 6]), Err(FftError::InvalidLength { len: 6 }));
    }

    #[test]
    fn in_place_leaves_buffer_untouched_on_error() {
        let planner = Planner64::new(8, Direction::Forward).unwrap();
        let mut signal = reals(&[1.0, 2.0, 3.0, 4.0]);
        let before = signal.clone();

        assert_eq!(
            fft_64_in_place(&mut signal, &Options::default(), &planner),
            Err(FftError::PlanLengthMismatch { plan: 8, signal: 4 })
        );
        assert_eq!(signal, before);
    }

    #[test]
    fn in_place_rejects_invalid_lengths_without_writing() {
        let planner = Planner64::new(4, Direction::Forward).unwrap();
        let opts = Options::default();

        let mut empty: Vec<Complex64> = vec![];
        assert_eq!(
            fft_64_in_place(&mut empty, &opts, &planner),
            Err(FftError::EmptyInput)
        );
        assert!(empty.is_empty());

        for len in [3, 5] {
            let mut signal = gen_random_signal(len, len as u64);
            let before = signal.clone();
            assert_eq!(
                fft_64_in_place(&mut signal, &opts, &planner),
                Err(FftError::InvalidLength { len })
            );
            assert_eq!(signal, before);
        }
    }

    #[test]
    fn in_place_matches_out_of_place() {
        let signal = gen_random_signal(256, 1);
        let planner = Planner64::new(256, Direction::Forward).unwrap();
        let opts = Options::default();

        let mut buffer = signal.clone();
        fft_64_in_place(&mut buffer, &opts, &planner).unwrap();
        assert_eq!(buffer, fft_64_with_opts_and_plan(&signal, &opts, &planner).unwrap());
    }

    #[test]
    fn fft_matches_rustfft() {
        for log_n in 1..17 {
            let n = 1 << log_n;
            let signal = gen_random_signal(n, log_n as u64);

            let spectrum = fft_64(&signal).unwrap();
            let expected = reference_fft(&signal);
            assert_signal_closeness(&spectrum, &expected, 1e-9 * log_n as f64);
        }
    }

    #[test]
    fn round_trip() {
        for log_n in 0..15 {
            let n = 1 << log_n;
            let signal = gen_random_signal(n, 100 + log_n as u64);

            let recovered = ifft_64(&fft_64(&signal).unwrap()).unwrap();
            assert_signal_closeness(&recovered, &signal, 1e-12);
        }
    }

    #[test]
    fn parseval() {
        for log_n in [3, 8, 13] {
            let n = 1 << log_n;
            let signal = gen_random_signal(n, 42);
            let spectrum = fft_64(&signal).unwrap();

            let energy_time: f64 = signal.iter().map(|z| z.norm_sqr()).sum();
            let energy_freq: f64 = spectrum.iter().map(|z| z.norm_sqr()).sum::<f64>() / n as f64;
            assert_float_closeness(energy_time, energy_freq, 1e-9 * energy_time);
        }
    }

    #[test]
    fn simd_and_scalar_are_bit_identical() {
        let scalar = Options::default().with_kernel(Kernel::Scalar);
        let simd = Options::default().with_kernel(Kernel::Simd);

        for log_n in 3..14 {
            let n = 1 << log_n;
            let signal = gen_random_signal(n, 7 * log_n as u64);

            let a = forward(&signal, &scalar);
            let b = forward(&signal, &simd);
            assert!(a
                .iter()
                .zip(b.iter())
                .all(|(x, y)| x.re.to_bits() == y.re.to_bits() && x.im.to_bits() == y.im.to_bits()));
        }
    }

    #[test]
    fn simd_below_threshold_falls_back_to_scalar() {
        let simd = Options::default()
            .with_kernel(Kernel::Simd)
            .with_simd_threshold(1 << 10);
        let signal = gen_random_signal(64, 9);
        assert_eq!(forward(&signal, &simd), forward(&signal, &Options::default()));
    }

    #[test]
    fn parallel_and_serial_are_bit_identical() {
        let n = 1 << 14;
        let signal = gen_random_signal(n, 23);

        for kernel in [Kernel::Scalar, Kernel::Simd] {
            let serial = Options::default().with_kernel(kernel);
            let parallel = serial.clone().with_parallelism(4);
            assert_eq!(forward(&signal, &serial), forward(&signal, &parallel));
        }
    }

    #[test]
    fn plan_is_reusable() {
        let planner = Planner64::new(32, Direction::Forward).unwrap();
        let opts = Options::guess_options(32);

        for seed in 0..4 {
            let signal = gen_random_signal(32, seed);
            let spectrum = fft_64_with_opts_and_plan(&signal, &opts, &planner).unwrap();
            assert_signal_closeness(&spectrum, &reference_fft(&signal), 1e-12);
        }
    }

    #[test]
    fn real_input() {
        let spectrum = fft_real_64(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_signal_closeness(
            &spectrum,
            &[c(10.0, 0.0), c(-2.0, 2.0), c(-2.0, 0.0), c(-2.0, -2.0)],
            1e-12,
        );
    }

    #[test]
    fn split_components_round_trip() {
        let signal = gen_random_signal(64, 31);
        let mut re: Vec<f64> = signal.iter().map(|z| z.re).collect();
        let mut im: Vec<f64> = signal.iter().map(|z| z.im).collect();

        fft_64_re_im(&mut re, &mut im, Direction::Forward).unwrap();
        let expected = reference_fft(&signal);
        for ((z_re, z_im), w) in re.iter().zip(im.iter()).zip(expected.iter()) {
            assert_float_closeness(*z_re, w.re, 1e-12);
            assert_float_closeness(*z_im, w.im, 1e-12);
        }

        fft_64_re_im(&mut re, &mut im, Direction::Reverse).unwrap();
        for ((z_re, z_im), w) in re.iter().zip(im.iter()).zip(signal.iter()) {
            assert_float_closeness(*z_re, w.re, 1e-12);
            assert_float_closeness(*z_im, w.im, 1e-12);
        }
    }

    #[test]
    fn split_components_must_match() {
        let mut re = vec![0.0; 4];
        let mut im = vec![0.0; 8];
        assert_eq!(
            fft_64_re_im(&mut re, &mut im, Direction::Forward),
            Err(FftError::MismatchedComponents { reals: 4, imags: 8 })
        );
    }
}

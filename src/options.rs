/// Options to tune to improve performance depending on the hardware and input size.
///
/// Calling FFT routines without specifying options will automatically select reasonable defaults
/// depending on the input size and the capabilities of the current CPU.
///
/// You only need to tune these options if you are trying to squeeze maximum performance
/// out of a known hardware platform that you can benchmark at varying input sizes.
/// Forcing [`Kernel::Scalar`] is also useful to get a reference result on any machine.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct Options {
    /// Which butterfly inner loop to run
    pub kernel: Kernel,
    /// Minimum transform length for which the vectorized inner loop is used.
    /// Shorter transforms always run the scalar loop.
    pub simd_threshold: usize,
    /// Number of chunks each stage is split into. `1` runs every stage on the calling thread.
    pub parallelism: usize,
}

/// Transform length (in elements) at which [`Options::guess_options`] starts splitting stages
/// across threads. Below this, dispatch overhead outweighs the butterfly work.
pub const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Default for [`Options::simd_threshold`]
pub const SIMD_THRESHOLD: usize = 8;

impl Default for Options {
    fn default() -> Self {
        Self {
            kernel: Kernel::Scalar,
            simd_threshold: SIMD_THRESHOLD,
            parallelism: 1,
        }
    }
}

impl Options {
    /// Picks options for a transform of `input_size` elements on the current machine.
    pub fn guess_options(input_size: usize) -> Options {
        let mut options = Options {
            kernel: Kernel::detect(),
            ..Options::default()
        };
        if input_size >= PARALLEL_THRESHOLD {
            options.parallelism = available_parallelism();
        }
        options
    }

    /// Returns these options with the given kernel
    pub fn with_kernel(mut self, kernel: Kernel) -> Self {
        self.kernel = kernel;
        self
    }

    /// Returns these options with the given SIMD threshold
    pub fn with_simd_threshold(mut self, simd_threshold: usize) -> Self {
        self.simd_threshold = simd_threshold;
        self
    }

    /// Returns these options with the given parallelism degree, clamped to at least 1
    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism.max(1);
        self
    }

    /// Whether a transform of length `n` should run the vectorized inner loop
    #[inline]
    pub(crate) fn use_simd(&self, n: usize) -> bool {
        self.kernel == Kernel::Simd && n >= self.simd_threshold
    }
}

/// The butterfly inner loop to use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Kernel {
    #[default]
    /// One complex butterfly at a time. Available everywhere.
    Scalar,
    /// Two complex butterflies per 256-bit vector operation.
    ///
    /// Produces bit-identical results to [`Kernel::Scalar`].
    Simd,
}

impl Kernel {
    /// Checks the current CPU for wide floating-point lanes.
    ///
    /// This is meant to be called once and the result passed around through [`Options`].
    pub fn detect() -> Kernel {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            if std::arch::is_x86_feature_detected!("avx2") {
                return Kernel::Simd;
            }
        }
        #[cfg(target_arch = "aarch64")]
        {
            if std::arch::is_aarch64_feature_detected!("neon") {
                return Kernel::Simd;
            }
        }
        Kernel::Scalar
    }
}

#[cfg(feature = "parallel")]
fn available_parallelism() -> usize {
    rayon::current_num_threads()
}

#[cfg(not(feature = "parallel"))]
fn available_parallelism() -> usize {
    1
}

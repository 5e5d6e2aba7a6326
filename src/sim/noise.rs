use num_complex::Complex64;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Convert a target SNR in dB into the per-axis noise standard deviation.
///
/// `eb_no_lin = 10^(snr_db/10)`, `no = 1/eb_no_lin`, `scale = sqrt(no/2)`.
/// The transmitted signal has unit average power per axis, so splitting
/// the noise power across real and imaginary parts (`/2`) makes the
/// configured value the ratio of total signal power to total noise power.
/// Strictly decreasing in `snr_db`; deliberately unclamped, so a very
/// negative SNR yields a very large scale. Below roughly -3083 dB the
/// result overflows to infinity; `SimConfig::validate` rejects such
/// configurations before any simulation starts.
pub fn noise_scale(snr_db: f64) -> f64 {
    let eb_no_lin = 10f64.powf(snr_db / 10.0);
    let no = 1.0 / eb_no_lin;
    (no / 2.0).sqrt()
}

/// Complex AWGN source with a fixed per-axis standard deviation.
///
/// Real and imaginary parts are drawn independently from
/// `Normal(0, scale)`.
#[derive(Debug, Clone)]
pub struct NoiseSource {
    distr: Normal<f64>,
    scale: f64,
}

impl NoiseSource {
    /// # Panics
    ///
    /// Panics if `scale` is negative or non-finite. `noise_scale` of any
    /// finite SNR never is, and configs are validated before this runs.
    pub fn new(scale: f64) -> Self {
        assert!(scale.is_finite() && scale >= 0.0);
        Self {
            distr: Normal::new(0.0, scale).unwrap(),
            scale,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Draw one frame's worth of frequency-domain white noise.
    pub fn complex_vector<R: Rng>(&self, len: usize, rng: &mut R) -> Vec<Complex64> {
        (0..len)
            .map(|_| Complex64::new(self.distr.sample(rng), self.distr.sample(rng)))
            .collect()
    }
}

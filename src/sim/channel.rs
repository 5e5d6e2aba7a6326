use std::sync::Arc;

use num_complex::Complex64;
use rand::Rng;
use rustfft::{Fft, FftPlanner};

use crate::sim::noise::NoiseSource;

/// OFDM-style per-frame channel: frequency-domain symbols are carried to
/// the time domain, AWGN is superposed there, and the receiver FFT brings
/// the superposition back for per-subcarrier detection.
///
/// Normalization convention of this module: the inverse transform divides
/// by N and the forward transform is unscaled (rustfft leaves both
/// unscaled), so `to_freq(to_time(x)) == x` exactly. The zero-noise
/// round-trip test pins this down.
pub struct FrameChannel {
    n: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl FrameChannel {
    /// Plan both transforms once; frames reuse the plans.
    pub fn new(n: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            n,
            forward: planner.plan_fft_forward(n),
            inverse: planner.plan_fft_inverse(n),
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Inverse DFT with 1/N scaling.
    pub fn to_time(&self, freq: &[Complex64]) -> Vec<Complex64> {
        let mut buffer = freq.to_vec();
        self.inverse.process(&mut buffer);
        let norm = 1.0 / self.n as f64;
        for v in buffer.iter_mut() {
            *v *= norm;
        }
        buffer
    }

    /// Forward DFT, unscaled.
    pub fn to_freq(&self, time: &[Complex64]) -> Vec<Complex64> {
        let mut buffer = time.to_vec();
        self.forward.process(&mut buffer);
        buffer
    }

    /// Push one frame through the channel and return the received row.
    ///
    /// The noise vector passes through the same inverse transform as the
    /// frame before superposition, keeping both in the time domain. A
    /// white Gaussian vector stays white under the transform, so the
    /// noise reaching the detector keeps the calibrated per-axis scale.
    pub fn transmit_frame<R: Rng>(
        &self,
        frame: &[Complex64],
        noise: &NoiseSource,
        rng: &mut R,
    ) -> Vec<Complex64> {
        debug_assert_eq!(frame.len(), self.n);
        let time = self.to_time(frame);
        let noise_time = self.to_time(&noise.complex_vector(self.n, rng));
        let superposed: Vec<Complex64> = time
            .iter()
            .zip(noise_time.iter())
            .map(|(t, n)| t + n)
            .collect();
        self.to_freq(&superposed)
    }
}

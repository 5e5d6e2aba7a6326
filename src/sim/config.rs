use std::fmt;

use crate::sim::noise;

/// Simulation parameters: matrix dimension, target SNR, optional seed.
///
/// `n` is both the frame length and the number of frames (the symbol
/// matrix is N×N). `seed` pins the random streams for reproducible runs;
/// when absent a seed is drawn from entropy and reported in the output.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub n: usize,
    pub snr_db: f64,
    pub seed: Option<u64>,
}

impl SimConfig {
    pub fn new(n: usize, snr_db: f64) -> Self {
        Self {
            n,
            snr_db,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects configurations no simulation should start from. A very
    /// negative (finite) SNR is valid input, not an error, as long as
    /// the calibrated noise scale is still representable: below roughly
    /// -3083 dB the linear noise power overflows f64, and that is
    /// reported here instead of failing mid-run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if !self.snr_db.is_finite() {
            return Err(ConfigError::NonFiniteSnr(self.snr_db));
        }
        if !noise::noise_scale(self.snr_db).is_finite() {
            return Err(ConfigError::NoiseScaleOverflow(self.snr_db));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// N must be a positive integer (the type already rules out
    /// fractional values).
    ZeroDimension,
    /// SNR was NaN or infinite.
    NonFiniteSnr(f64),
    /// SNR so negative that the linear noise power exceeds f64 range.
    NoiseScaleOverflow(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDimension => {
                write!(f, "matrix dimension N must be a positive integer, got 0")
            }
            ConfigError::NonFiniteSnr(snr) => {
                write!(f, "SNR must be a finite number of dB, got {}", snr)
            }
            ConfigError::NoiseScaleOverflow(snr) => {
                write!(
                    f,
                    "SNR {} dB is too negative: the calibrated noise scale overflows f64",
                    snr
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

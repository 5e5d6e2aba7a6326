/// Log level (overridable via RUST_LOG)
pub const LOG_LEVEL: &str = "info";

/// Default frame/matrix dimension (N symbols per frame, N frames per block)
pub const DEFAULT_N: usize = 64;

/// Default target SNR (dB)
pub const DEFAULT_SNR_DB: f64 = 10.0;

/// Default sweep lower bound (dB)
pub const SNR_MIN: f64 = -10.0;

/// Default sweep upper bound (dB)
pub const SNR_MAX: f64 = 10.0;

/// Default sweep step (dB)
pub const SNR_STEP: f64 = 1.0;

pub mod channel;
pub mod config;
pub mod detect;
pub mod noise;
pub mod source;

use num_complex::Complex64;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use config::{ConfigError, SimConfig};

/// Stream index reserved for symbol generation; frame `i` draws its
/// noise from stream `i + 1`.
const SYMBOL_STREAM: u64 = 0;

/// Everything a run produces. `transmitted` is the ground-truth symbol
/// matrix, `received` what the detector saw, `seed` the value that
/// reproduces the run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutput {
    pub transmitted: Vec<Vec<Complex64>>,
    pub received: Vec<Vec<Complex64>>,
    pub frame_errors: Vec<usize>,
    pub symbol_errors: usize,
    pub ber: f64,
    pub seed: u64,
}

fn stream_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

/// RNG for the symbol matrix of a run with the given seed.
pub fn symbol_rng(seed: u64) -> ChaCha8Rng {
    stream_rng(seed, SYMBOL_STREAM)
}

/// RNG for frame `index`'s noise. Streams are indexed by frame, not by
/// processing order, so frames can be computed in any order (or in
/// parallel) with identical results.
pub fn frame_rng(seed: u64, index: usize) -> ChaCha8Rng {
    stream_rng(seed, 1 + index as u64)
}

/// Run the whole pipeline once: generate the N×N QPSK matrix, push each
/// frame through the AWGN channel, slice, and accumulate the BER.
pub fn simulate(config: &SimConfig) -> Result<SimulationOutput, ConfigError> {
    config.validate()?;

    let n = config.n;
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let scale = noise::noise_scale(config.snr_db);
    tracing::debug!(
        "SNR = {} dB -> noise scale = {} (seed {})",
        config.snr_db,
        scale,
        seed
    );

    let transmitted = source::symbol_matrix(n, &mut symbol_rng(seed));
    tracing::trace!("s = {:?}", transmitted);

    let channel = channel::FrameChannel::new(n);
    let noise_source = noise::NoiseSource::new(scale);

    let mut received = Vec::with_capacity(n);
    let mut frame_errors = Vec::with_capacity(n);
    let mut symbol_errors = 0usize;

    for (i, frame) in transmitted.iter().enumerate() {
        let mut rng = frame_rng(seed, i);
        let row = channel.transmit_frame(frame, &noise_source, &mut rng);
        let errors = detect::frame_errors(frame, &row);
        tracing::trace!("frame {}: {} symbol errors, w[{}] = {:?}", i, errors, i, row);
        symbol_errors += errors;
        frame_errors.push(errors);
        received.push(row);
    }

    let ber = symbol_errors as f64 / (n * n) as f64;
    tracing::debug!(
        "{} symbol errors out of {} -> BER = {}",
        symbol_errors,
        n * n,
        ber
    );

    Ok(SimulationOutput {
        transmitted,
        received,
        frame_errors,
        symbol_errors,
        ber,
        seed,
    })
}

use clap::{Parser, Subcommand};
use rand::Rng;
use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::process::ExitCode;

use qpsksim::report::ConstellationReport;
use qpsksim::sim::{self, SimConfig};
use qpsksim::ui;
use qpsksim::ui::progress::{ProgressManager, templates};
use qpsksim::utils::consts::*;
use qpsksim::utils::logging::init_logging;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one N×N block at a single SNR and print the BER
    Run {
        /// Frame length and frame count (the symbol matrix is N×N)
        #[arg(short, long, default_value_t = DEFAULT_N)]
        n: usize,
        /// Target SNR in dB
        #[arg(short, long, default_value_t = DEFAULT_SNR_DB, allow_hyphen_values = true)]
        snr: f64,
        /// Seed for reproducible runs (drawn from entropy if absent)
        #[arg(long)]
        seed: Option<u64>,
        /// Write the received constellation as JSON for external plotting
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Run the simulation at each SNR step across a range and print a BER table
    Sweep {
        #[arg(short, long, default_value_t = DEFAULT_N)]
        n: usize,
        #[arg(long, default_value_t = SNR_MIN, allow_hyphen_values = true)]
        snr_min: f64,
        #[arg(long, default_value_t = SNR_MAX, allow_hyphen_values = true)]
        snr_max: f64,
        #[arg(long, default_value_t = SNR_STEP)]
        step: f64,
        /// Base seed; each SNR point derives its own stream from it
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum SweepError {
    NonPositiveStep(f64),
    EmptyRange { snr_min: f64, snr_max: f64 },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::NonPositiveStep(step) => {
                write!(f, "sweep step must be a positive number of dB, got {}", step)
            }
            SweepError::EmptyRange { snr_min, snr_max } => {
                write!(
                    f,
                    "sweep range is empty: snr_min {} dB > snr_max {} dB",
                    snr_min, snr_max
                )
            }
        }
    }
}

impl std::error::Error for SweepError {}

/// SNR points of a sweep: snr_min, snr_min + step, ... up to snr_max
/// (inclusive, within float tolerance).
fn sweep_points(snr_min: f64, snr_max: f64, step: f64) -> Result<Vec<f64>, SweepError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(SweepError::NonPositiveStep(step));
    }
    if snr_min > snr_max {
        return Err(SweepError::EmptyRange { snr_min, snr_max });
    }

    let mut points = Vec::new();
    let mut snr = snr_min;
    while snr <= snr_max + 1e-9 {
        points.push(snr);
        snr += step;
    }
    Ok(points)
}

fn main() -> ExitCode {
    init_logging();
    ui::print_banner();
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Run {
            n,
            snr,
            seed,
            output,
        } => {
            let mut config = SimConfig::new(n, snr);
            config.seed = seed;
            let result = sim::simulate(&config)?;
            println!(
                "SNR = {} dB, N = {} -> BER = {} ({} of {} symbols in error, seed {})",
                snr,
                n,
                result.ber,
                result.symbol_errors,
                n * n,
                result.seed
            );
            if let Some(path) = output {
                let file = BufWriter::new(File::create(&path)?);
                ConstellationReport::from_output(snr, &result).write_json(file)?;
                tracing::info!("Received constellation written to {}", path);
            }
            Ok(())
        }
        Commands::Sweep {
            n,
            snr_min,
            snr_max,
            step,
            seed,
        } => {
            let points = sweep_points(snr_min, snr_max, step)?;

            let base_seed = seed.unwrap_or_else(|| rand::rng().random());
            println!("# N = {}, base seed = {}", n, base_seed);
            println!("{:>8}  {:>10}", "SNR(dB)", "BER");

            let progress = ProgressManager::new();
            progress.create_bar("sweep", points.len() as u64, templates::SWEEP, "")?;

            for (i, &snr) in points.iter().enumerate() {
                let config = SimConfig::new(n, snr).with_seed(base_seed.wrapping_add(i as u64));
                let result = sim::simulate(&config)?;
                println!("{:>8.1}  {:>10.6}", snr, result.ber);
                progress.set_message("sweep", &format!("{:.1} dB", snr))?;
                progress.inc("sweep", 1)?;
            }

            progress.finish("sweep", "done")?;
            progress.finish_all();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_points_cover_the_range_inclusively() {
        let points = sweep_points(-10.0, 10.0, 1.0).unwrap();
        assert_eq!(points.len(), 21);
        assert_eq!(points[0], -10.0);
        assert!((points[20] - 10.0).abs() < 1e-9);
    }

    #[test]
    fn single_point_range_is_valid() {
        let points = sweep_points(5.0, 5.0, 1.0).unwrap();
        assert_eq!(points, vec![5.0]);
    }

    #[test]
    fn rejects_non_positive_or_non_finite_step() {
        assert_eq!(
            sweep_points(-10.0, 10.0, 0.0),
            Err(SweepError::NonPositiveStep(0.0))
        );
        assert_eq!(
            sweep_points(-10.0, 10.0, -1.0),
            Err(SweepError::NonPositiveStep(-1.0))
        );
        assert!(matches!(
            sweep_points(-10.0, 10.0, f64::NAN),
            Err(SweepError::NonPositiveStep(_))
        ));
    }

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            sweep_points(10.0, -10.0, 1.0),
            Err(SweepError::EmptyRange {
                snr_min: 10.0,
                snr_max: -10.0
            })
        );
    }
}

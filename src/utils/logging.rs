use tracing_subscriber::{EnvFilter, fmt};

/// Diagnostics go to stderr so stdout stays clean for the BER line and
/// the JSON constellation report.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(crate::utils::consts::LOG_LEVEL))
        .unwrap();

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &'static str = "INTENSITY_LOG";

/// Installs the global fmt subscriber, filtered by `INTENSITY_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

use tracing_subscriber::EnvFilter;

/// Environment variable holding the `tracing` filter directive, e.g. `debug`.
pub const LOG_ENV: &str = "DISCOGRAPHY_LOG";

/// Install the stderr subscriber. Defaults to `warn` when `DISCOGRAPHY_LOG` is unset or invalid.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

//! Tracing initialization for the CLI.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initializes the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from the CLI
/// override, otherwise from the configured level. Events go to stderr
/// so command output stays clean on stdout.
pub fn init_tracing(logging: &LoggingConfig, cli_override: Option<&str>) {
    let level = cli_override.unwrap_or(logging.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

//! Logging init: stderr only, so log lines never mix with the notices on stdout.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

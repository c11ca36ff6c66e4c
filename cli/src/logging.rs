use std::io;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Install the global subscriber. Logs go to stderr, stdout only carries rendered rows.
pub fn register_logger(filter: &str) {
    let log_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(filter);
    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_writer(io::stderr)
        .init();
}

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Logs go to stderr so generated output on
/// stdout stays clean. `RUST_LOG` takes precedence over `level`.
pub(crate) fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

use tracing_subscriber::{fmt, EnvFilter};

/// Logs go to stderr so stdout stays reserved for tool output and `--json`.
/// `RUST_LOG` controls the level; the default is `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

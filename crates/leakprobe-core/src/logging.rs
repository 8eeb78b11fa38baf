//! Logging init: tracing to stderr, since stdout-adjacent output is the
//! scan report itself.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr. `RUST_LOG` overrides the default
/// filter.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,leakprobe=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

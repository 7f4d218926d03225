//! Diagnostic logging for the binary.
//!
//! Engine internals log through `tracing`; nothing is printed unless a
//! subscriber is installed. `RUST_LOG` overrides the default `warn` level,
//! e.g. `RUST_LOG=pokerbots_engine=debug`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Installs a stderr `fmt` subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

//! Output: logging setup and the reporter handed to application services.

pub mod reporter;

use std::io::IsTerminal as _;

use tracing_subscriber::EnvFilter;

pub use reporter::TracingReporter;

/// Default filter when `RUST_LOG` is unset.
#[must_use]
pub fn default_filter(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}

/// Install the process-wide tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `--debug` selects `debug`,
/// which is what makes diagnostics visible.
pub fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

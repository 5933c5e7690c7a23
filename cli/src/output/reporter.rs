//! `TracingReporter` — implementation of `Reporter` on top of `tracing`.

use crate::application::ports::Reporter;

/// Forwards reporter calls to the global tracing subscriber.
///
/// - `info()` → `tracing::info!`
/// - `warn()` → `tracing::warn!`
/// - `diag()` → `tracing::debug!` (hidden unless `--debug`)
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn diag(&self, message: &str) {
        tracing::debug!("{message}");
    }
}

//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs`, or `std::process`. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Input errors ──────────────────────────────────────────────────────────────

/// Positional inputs other than the pod and app identifiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("enter executable path is missing")]
    MissingEnterPath,

    #[error("target PID is missing")]
    MissingPid,

    #[error("invalid target PID {0:?}: must be a positive decimal integer")]
    InvalidPid(String),
}

// ── Pod errors ────────────────────────────────────────────────────────────────

/// The pod directory could not be loaded.
#[derive(Debug, Error)]
pub enum PodError {
    #[error("failed to read {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} has acKind {found:?}, expected {expected:?}", path.display())]
    WrongKind {
        path: PathBuf,
        expected: &'static str,
        found: String,
    },

    #[error("pod directory belongs to {found}, not {requested}")]
    UuidMismatch { requested: String, found: String },
}

// ── Unit errors ───────────────────────────────────────────────────────────────

/// Removing an app's unit file failed for a reason other than absence.
#[derive(Debug, Error)]
pub enum UnitError {
    #[error("error removing app service file {}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ── Supervisor errors ─────────────────────────────────────────────────────────

/// The supervisor could not be told to reload its units.
#[derive(Debug, Error)]
pub enum SupervisorError {
    #[error("error executing \"systemctl daemon-reload\": {0}")]
    ReloadNotStarted(String),

    #[error("error executing \"systemctl daemon-reload\": {status}{}", stderr_suffix(.stderr))]
    ReloadFailed { status: String, stderr: String },
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`
//! or `crate::output`.

use std::path::Path;
use std::process::Output;

use anyhow::Result;
use stage1_common::PodUuid;

use crate::domain::{Pod, TargetPid};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture its output.
    ///
    /// No timeout is applied: a hung child blocks the caller.
    ///
    /// # Errors
    ///
    /// Returns an error only if the process cannot be spawned or waited on.
    /// A non-zero exit is reported through `Output::status`.
    async fn run(&self, program: &Path, args: &[String]) -> Result<Output>;
}

// ── Namespace Entry Port ──────────────────────────────────────────────────────

/// Runs a command inside the namespaces of another process.
#[allow(async_fn_in_trait)]
pub trait NamespaceRunner {
    /// Run `argv` as if inside the namespaces of `pid`.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry mechanism itself cannot be started.
    async fn run_in_namespace(&self, pid: TargetPid, argv: &[String]) -> Result<Output>;
}

// ── Pod Port ──────────────────────────────────────────────────────────────────

/// Loads a pod from its directory.
pub trait PodLoader {
    /// Load and check the pod stored at `root`.
    ///
    /// # Errors
    ///
    /// Returns a `PodError` if the pod is missing, corrupt, or belongs to a
    /// different UUID.
    fn load(&self, root: &Path, uuid: &PodUuid) -> Result<Pod>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Removes unit files.
///
/// Returns the raw `io::Error` so callers can tell absence from failure.
pub trait UnitFs {
    fn remove_file(&self, path: &Path) -> std::io::Result<()>;
}

// ── Reporting Port ────────────────────────────────────────────────────────────

/// Abstracts operator-facing logging so services can report without touching
/// global logger state. Sync trait — no async needed.
pub trait Reporter {
    /// Something the operator should always see.
    fn info(&self, message: &str);
    /// An expected refusal or degraded condition.
    fn warn(&self, message: &str);
    /// Detail that is only shown in debug mode.
    fn diag(&self, message: &str);
}

//! Application service — remove one app from a running pod.
//!
//! Load pod → probe liveness → remove units → reload supervisor. Strictly
//! sequential; nothing is retried and nothing is rolled back.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{NamespaceRunner, PodLoader, Reporter, UnitFs};
use crate::application::services::{liveness, supervisor, unit_cleaner};
use crate::domain::{Identity, Liveness};

/// How a removal ended when no step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Units removed and supervisor reloaded.
    Removed,
    /// The app is still active; nothing was touched.
    StillRunning,
}

/// Remove the app named in `identity` from the pod at `root`.
///
/// Unit files are deleted before the reload, so a reload failure leaves the
/// supervisor's view stale until the next successful reload.
///
/// # Errors
///
/// Returns an error if the pod cannot be loaded, a unit file cannot be
/// removed, or the supervisor reload fails.
pub async fn remove_app(
    root: &Path,
    identity: &Identity,
    pods: &impl PodLoader,
    enter: &impl NamespaceRunner,
    fs: &impl UnitFs,
    reporter: &impl Reporter,
) -> Result<RemovalOutcome> {
    let app = &identity.app;

    // 1. Load pod
    let pod = pods
        .load(root, &identity.uuid)
        .context("failed to load pod")?;
    reporter.diag(&format!("loaded pod {} at {}", pod.uuid, pod.root.display()));
    if !pod.has_app(app) {
        reporter.diag(&format!("app {:?} is not listed in the pod manifest", app.as_str()));
    }

    // 2. Refuse while the app is active
    if liveness::probe(enter, identity.pid, app, reporter).await == Liveness::Running {
        reporter.warn(&format!("app {:?} is still running", app.as_str()));
        return Ok(RemovalOutcome::StillRunning);
    }

    // 3. Remove unit files
    let units = pod.unit_paths(app);
    unit_cleaner::remove_units(fs, &units, reporter)?;

    // 4. Reload supervisor
    supervisor::reload(enter, identity.pid, reporter).await?;

    // TODO: unmount the app's volumes once stage1 records per-app mounts.

    reporter.info(&format!("app {:?} removed from pod {}", app.as_str(), pod.uuid));
    Ok(RemovalOutcome::Removed)
}

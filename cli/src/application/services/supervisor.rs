//! Supervisor notifier — makes the in-pod supervisor re-read its unit files.

use anyhow::Result;

use crate::application::ports::{NamespaceRunner, Reporter};
use crate::domain::units;
use crate::domain::{SupervisorError, TargetPid};

/// Run `systemctl daemon-reload` inside the pod.
///
/// # Errors
///
/// Returns a [`SupervisorError`] if the reload cannot be started or exits
/// non-zero.
pub async fn reload(
    enter: &impl NamespaceRunner,
    pid: TargetPid,
    reporter: &impl Reporter,
) -> Result<()> {
    let argv = units::daemon_reload_argv();
    reporter.diag(&format!("reloading supervisor: {}", argv.join(" ")));

    let output = enter
        .run_in_namespace(pid, &argv)
        .await
        .map_err(|e| SupervisorError::ReloadNotStarted(format!("{e:#}")))?;

    if !output.status.success() {
        return Err(SupervisorError::ReloadFailed {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
        .into());
    }
    Ok(())
}

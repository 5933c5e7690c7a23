//! Liveness probe — asks the supervisor, from inside the pod's PID
//! namespace, whether the app's unit is still active.

use crate::application::ports::{NamespaceRunner, Reporter};
use crate::domain::units::{self, Liveness};
use crate::domain::TargetPid;
use stage1_common::AppName;

/// Query the app's unit state.
///
/// Only the query's stdout decides the result; its exit status is ignored.
/// If the query cannot be run at all there is no output, which also counts
/// as running.
pub async fn probe(
    enter: &impl NamespaceRunner,
    pid: TargetPid,
    app: &AppName,
    reporter: &impl Reporter,
) -> Liveness {
    let argv = units::is_active_argv(app);
    reporter.diag(&format!("querying unit state: {}", argv.join(" ")));

    let stdout = match enter.run_in_namespace(pid, &argv).await {
        Ok(output) => {
            reporter.diag(&format!(
                "is-active exited with {}, output {:?}",
                output.status,
                String::from_utf8_lossy(&output.stdout)
            ));
            output.stdout
        }
        Err(e) => {
            reporter.diag(&format!("status query could not run: {e:#}"));
            Vec::new()
        }
    };

    Liveness::from_status_output(&stdout)
}

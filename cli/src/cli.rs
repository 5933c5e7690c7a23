//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::application::{RemovalOutcome, remove_app};
use crate::domain::identity;
use crate::infra::{EnterRunner, LocalFs, ManifestPodLoader, TokioCommandRunner};
use crate::output::TracingReporter;

/// Remove an app from a running pod
///
/// Refuses while the app's unit is still active. Otherwise deletes the
/// app's service and reaper units and reloads the pod's supervisor.
#[derive(Parser, Debug)]
#[command(name = "app-rm", version)]
pub struct Cli {
    /// Run in debug mode
    #[arg(long, env = "STAGE1_APP_RM_DEBUG")]
    pub debug: bool,

    /// Pod directory
    #[arg(long, env = "STAGE1_APP_RM_POD_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Pod UUID
    pub uuid: Option<String>,

    /// Name of the app to remove
    pub app: Option<String>,

    /// Executable that runs a command inside another process's namespaces
    pub enter: Option<String>,

    /// PID of the pod's supervisor
    pub pid: Option<String>,
}

impl Cli {
    /// Execute the removal.
    ///
    /// # Errors
    ///
    /// Returns an error if an input is missing or malformed, or if any
    /// removal step fails.
    pub async fn run(self) -> Result<RemovalOutcome> {
        let Cli {
            root,
            uuid,
            app,
            enter,
            pid,
            ..
        } = self;
        let identity = identity::resolve(
            uuid.as_deref(),
            app.as_deref(),
            enter.as_deref(),
            pid.as_deref(),
        )?;

        let enter = EnterRunner::new(identity.enter_path.clone(), TokioCommandRunner::new());
        remove_app(
            &root,
            &identity,
            &ManifestPodLoader,
            &enter,
            &LocalFs,
            &TracingReporter,
        )
        .await
    }
}

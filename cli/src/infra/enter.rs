//! Namespace entry through an external enter executable.

use std::path::PathBuf;
use std::process::Output;

use anyhow::Result;

use crate::application::ports::{CommandRunner, NamespaceRunner};
use crate::domain::TargetPid;

/// Runs commands inside a pod by invoking `<enter> --pid=<pid> <argv...>`.
pub struct EnterRunner<R> {
    enter_path: PathBuf,
    runner: R,
}

impl<R: CommandRunner> EnterRunner<R> {
    #[must_use]
    pub fn new(enter_path: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            enter_path: enter_path.into(),
            runner,
        }
    }
}

impl<R: CommandRunner> NamespaceRunner for EnterRunner<R> {
    async fn run_in_namespace(&self, pid: TargetPid, argv: &[String]) -> Result<Output> {
        let mut args = Vec::with_capacity(argv.len() + 1);
        args.push(pid.enter_flag());
        args.extend_from_slice(argv);
        self.runner.run(&self.enter_path, &args).await
    }
}

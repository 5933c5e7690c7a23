//! Infrastructure implementation of the `CommandRunner` port.

use std::path::Path;
use std::process::{Output, Stdio};

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use crate::application::ports::CommandRunner;

/// Production `CommandRunner` — spawns the program with tokio and waits for
/// it while draining stdout and stderr concurrently.
///
/// There is deliberately no timeout; the child is killed only if the future
/// is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &Path, args: &[String]) -> Result<Output> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {}", program.display()))?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        let (status, stdout, stderr) = tokio::join!(
            child.wait(),
            async {
                let mut buf = Vec::new();
                if let Some(ref mut h) = stdout_handle {
                    let _ = h.read_to_end(&mut buf).await;
                }
                buf
            },
            async {
                let mut buf = Vec::new();
                if let Some(ref mut h) = stderr_handle {
                    let _ = h.read_to_end(&mut buf).await;
                }
                buf
            },
        );

        Ok(Output {
            status: status.with_context(|| format!("waiting for {}", program.display()))?,
            stdout,
            stderr,
        })
    }
}

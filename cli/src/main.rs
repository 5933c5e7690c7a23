//! `app-rm` — remove one app from a running pod.

use std::process::ExitCode;

use clap::Parser;
use stage1_app_rm::application::RemovalOutcome;
use stage1_app_rm::cli::Cli;
use stage1_app_rm::output;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    output::init_logging(cli.debug);

    match cli.run().await {
        Ok(RemovalOutcome::Removed) => ExitCode::SUCCESS,
        Ok(RemovalOutcome::StillRunning) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

//! Entry point for the Samba launcher.
use std::{env, process::ExitCode};

use clap::Parser;
use samba_launcher::{
    cli::{build_profile, current_dir, launcher_executable, LaunchArgs},
    config::LauncherConfig,
    launcher::{self, LaunchExit, LaunchOutcome, ProcessIds, SystemProcessRunner},
    lib::telemetry,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<LaunchOutcome, LaunchExit> {
    telemetry::init_tracing().map_err(LaunchExit::from_error)?;
    let args = LaunchArgs::parse();
    let config =
        LauncherConfig::load(args.config_override.clone()).map_err(LaunchExit::from_error)?;

    let cwd = current_dir().map_err(LaunchExit::from_error)?;
    let launcher_path = launcher_executable().map_err(LaunchExit::from_error)?;
    let profile = build_profile(args, &config, &cwd, &launcher_path);

    let runner = SystemProcessRunner::new(profile.interrupt_grace);
    launcher::run(&profile, env::vars_os(), ProcessIds::current(), &runner)
        .await
        .map_err(LaunchExit::from_error)
}

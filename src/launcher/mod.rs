//! Build the compose invocation for a launch profile and run it once.
mod environment;
mod exit;
mod runner;

use std::{ffi::OsString, path::PathBuf};

use tracing::info;

use crate::{
    cli::LaunchProfile,
    lib::{
        compose::ComposeInvocation,
        errors::LaunchError,
        telemetry::{emit_launch, LaunchTelemetry},
    },
};

pub use environment::{
    LaunchEnvironment, ProcessIds, DATA_PATH_ENV, DEVICE_IP_ENV, DEVICE_PASS_ENV,
    DEVICE_USER_ENV, GROUP_ID_ENV, REQUIRED_CREDENTIALS, USER_ID_ENV,
};
pub use exit::LaunchExit;
pub use runner::{ChildOutcome, ProcessRunner, SystemProcessRunner};

/// Successful ways a launch can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// `docker compose up` exited with status 0.
    Completed,
    /// The user pressed Ctrl-C; this is a normal way to stop the share.
    Interrupted,
}

/// Validated, ready-to-run launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub invocation: ComposeInvocation,
    pub data_path: PathBuf,
    pub tunnel: bool,
}

/// Build the environment record, check device credentials, and assemble the command.
///
/// Nothing is spawned here; a credential failure leaves no side effects.
pub fn prepare<I>(
    profile: &LaunchProfile,
    parent_env: I,
    ids: ProcessIds,
) -> Result<LaunchPlan, LaunchError>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let environment = LaunchEnvironment::from_parent(parent_env, &profile.data_path, ids);
    environment.require_credentials()?;

    let invocation = ComposeInvocation::new(
        profile.program.clone(),
        profile.tunnel,
        &profile.project_dir,
        environment.into_vars(),
    );

    Ok(LaunchPlan {
        invocation,
        data_path: profile.data_path.clone(),
        tunnel: profile.tunnel,
    })
}

/// Start the compose project described by `profile` and block until it stops.
pub async fn run<I, R>(
    profile: &LaunchProfile,
    parent_env: I,
    ids: ProcessIds,
    runner: &R,
) -> Result<LaunchOutcome, LaunchError>
where
    I: IntoIterator<Item = (OsString, OsString)>,
    R: ProcessRunner,
{
    let plan = prepare(profile, parent_env, ids)?;
    emit_launch(&LaunchTelemetry {
        invocation: &plan.invocation,
        config_path: profile.config_path.as_deref(),
        data_path: &plan.data_path,
        tunnel: plan.tunnel,
    });

    let program = plan.invocation.program.clone();
    let outcome = runner.run(plan.invocation).await?;
    interpret_outcome(outcome, program)
}

fn interpret_outcome(outcome: ChildOutcome, program: String) -> Result<LaunchOutcome, LaunchError> {
    match outcome {
        ChildOutcome::Exited { code: 0 } => {
            info!(target: "samba_launcher::launch", program = %program, "Compose project stopped");
            Ok(LaunchOutcome::Completed)
        }
        ChildOutcome::Interrupted => {
            info!(target: "samba_launcher::launch", program = %program, "Stopped by user interrupt");
            Ok(LaunchOutcome::Interrupted)
        }
        ChildOutcome::Exited { code } => Err(LaunchError::CommandFailed {
            program,
            exit_code: code,
        }),
        ChildOutcome::Signaled { signal } => Err(LaunchError::CommandSignaled { program, signal }),
    }
}

//! Blocking execution of the compose child.

use std::{
    os::unix::process::ExitStatusExt,
    process::ExitStatus,
    time::Duration,
};

use tokio::{
    process::Child,
    signal::unix::{signal, SignalKind},
    time,
};
use tracing::{debug, info, warn};

use crate::lib::{
    compose::{build_compose_command, ComposeInvocation},
    errors::LaunchError,
};

/// How the wait on the compose child ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOutcome {
    Exited { code: i32 },
    /// The launcher (or the child, via SIGINT) was interrupted by the user.
    Interrupted,
    Signaled { signal: i32 },
}

impl ChildOutcome {
    pub fn from_status(status: ExitStatus) -> Self {
        match (status.code(), status.signal()) {
            (Some(code), _) => Self::Exited { code },
            (None, Some(libc::SIGINT)) => Self::Interrupted,
            (None, Some(signal)) => Self::Signaled { signal },
            (None, None) => Self::Exited { code: -1 },
        }
    }
}

/// Runs a compose invocation to completion.
///
/// The production implementation spawns a real process; test doubles can
/// record the invocation and return canned outcomes.
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    async fn run(&self, invocation: ComposeInvocation) -> Result<ChildOutcome, LaunchError>;
}

/// Spawns the child with inherited stdio and races it against SIGINT.
pub struct SystemProcessRunner {
    interrupt_grace: Duration,
}

impl SystemProcessRunner {
    #[must_use]
    pub fn new(interrupt_grace: Duration) -> Self {
        Self { interrupt_grace }
    }

    async fn settle_after_interrupt(&self, child: &mut Child, program: &str) {
        match time::timeout(self.interrupt_grace, child.wait()).await {
            Ok(Ok(status)) => debug!(
                target: "samba_launcher::launch",
                program,
                %status,
                "Child exited after interrupt"
            ),
            Ok(Err(err)) => warn!(
                target: "samba_launcher::launch",
                program,
                error = %err,
                "Failed to reap child after interrupt"
            ),
            Err(_) => {
                warn!(
                    target: "samba_launcher::launch",
                    program,
                    grace_ms = self.interrupt_grace.as_millis() as u64,
                    "Child still running after interrupt; killing it"
                );
                if let Err(err) = child.kill().await {
                    warn!(
                        target: "samba_launcher::launch",
                        program,
                        error = %err,
                        "Failed to kill child"
                    );
                }
            }
        }
    }
}

impl ProcessRunner for SystemProcessRunner {
    async fn run(&self, invocation: ComposeInvocation) -> Result<ChildOutcome, LaunchError> {
        // Registered before spawning so an early Ctrl-C cannot kill the launcher outright.
        let mut interrupt =
            signal(SignalKind::interrupt()).map_err(|source| LaunchError::Signal { source })?;

        let program = invocation.program.clone();
        let mut child = build_compose_command(&invocation)
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: program.clone(),
                source,
            })?;

        let status = tokio::select! {
            biased;
            _ = interrupt.recv() => None,
            status = child.wait() => Some(status.map_err(|source| LaunchError::Wait {
                program: program.clone(),
                source,
            })?),
        };

        match status {
            Some(status) => Ok(ChildOutcome::from_status(status)),
            None => {
                info!(
                    target: "samba_launcher::launch",
                    program = %program,
                    "Interrupted; stopping compose project"
                );
                self.settle_after_interrupt(&mut child, &program).await;
                Ok(ChildOutcome::Interrupted)
            }
        }
    }
}

//! Shared helpers for building `docker compose` commands.

use std::{
    collections::BTreeMap,
    ffi::OsString,
    path::{Path, PathBuf},
    process::Stdio,
};

use tokio::process::Command;

pub const DEFAULT_COMPOSE_PROGRAM: &str = "docker";
pub const COMPOSE_SUBCOMMAND: &str = "compose";
pub const TUNNEL_PROFILE: &str = "tunnel";
/// Starts the service stack in the foreground.
pub const UP_ACTION: &str = "up";

/// Everything needed to start the compose project once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
    pub env: BTreeMap<OsString, OsString>,
}

impl ComposeInvocation {
    pub fn new(
        program: impl Into<String>,
        tunnel: bool,
        working_dir: &Path,
        env: BTreeMap<OsString, OsString>,
    ) -> Self {
        Self {
            program: program.into(),
            args: build_compose_args(tunnel),
            working_dir: working_dir.to_path_buf(),
            env,
        }
    }

    /// Program followed by its arguments, as it would be typed in a shell.
    pub fn tokens(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

/// Arguments following the compose program.
pub fn build_compose_args(tunnel: bool) -> Vec<String> {
    let mut args = vec![COMPOSE_SUBCOMMAND.to_string()];
    if tunnel {
        args.push("--profile".to_string());
        args.push(TUNNEL_PROFILE.to_string());
    }
    args.push(UP_ACTION.to_string());
    args
}

/// Build a foreground `docker compose` command with inherited stdio.
pub fn build_compose_command(invocation: &ComposeInvocation) -> Command {
    let mut command = Command::new(&invocation.program);
    command.kill_on_drop(true);
    command.current_dir(&invocation.working_dir);
    command.env_clear();
    command.envs(&invocation.env);
    command.args(&invocation.args);
    command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    command
}

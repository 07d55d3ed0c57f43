//! Telemetry initialization and launch event helpers.

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::lib::compose::ComposeInvocation;

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload describing the compose invocation about to be started.
#[derive(Debug)]
pub struct LaunchTelemetry<'a> {
    pub invocation: &'a ComposeInvocation,
    pub config_path: Option<&'a Path>,
    pub data_path: &'a Path,
    pub tunnel: bool,
}

/// Emit the resolved invocation to `tracing`. Environment values stay out of the log.
pub fn emit_launch(telemetry: &LaunchTelemetry<'_>) {
    info!(
        target: "samba_launcher::launch",
        command = %telemetry.invocation.tokens().join(" "),
        project_dir = %telemetry.invocation.working_dir.display(),
        data_path = %telemetry.data_path.display(),
        tunnel = telemetry.tunnel,
        config_path = ?telemetry.config_path,
        env_vars = telemetry.invocation.env.len(),
        "Starting compose project"
    );
}

//! CLI argument definitions.
use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Run a Samba server that Axis devices can connect to",
    long_about = "Run a Samba server that Axis devices can connect to.\n\n\
        Configure the device with address = this host (or 127.0.0.1 when using --tunnel), \
        network share = `share`, no user, no password, SMB version auto.\n\n\
        Requires AXIS_DEVICE_IP, AXIS_DEVICE_USER and AXIS_DEVICE_PASS to be set."
)]
pub struct LaunchArgs {
    /// Location of the network share on this host (defaults to `<project dir>/data`).
    #[arg(long, env = "SAMBA_DATA_PATH", value_name = "PATH")]
    pub data: Option<PathBuf>,
    /// Punch through firewalls with an SSH tunnel to the device.
    #[arg(long, default_value_t = false)]
    pub tunnel: bool,
    /// Directory holding the compose project (defaults to `samba/` next to this executable).
    #[arg(long, env = "SAMBA_PROJECT_DIR", value_name = "DIR")]
    pub project_dir: Option<PathBuf>,
    /// Path to a TOML config file (defaults to `samba.toml` when present).
    #[arg(long = "config", env = "SAMBA_CONFIG_PATH", value_name = "PATH")]
    pub config_override: Option<PathBuf>,
}

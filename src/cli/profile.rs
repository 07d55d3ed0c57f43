//! LaunchProfile and path precedence resolution.
use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    config::LauncherConfig,
    lib::{
        errors::LaunchError,
        paths::{absolutize, project_dir_for, resolve_data_path},
    },
};

use super::LaunchArgs;

/// Resolved launch profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchProfile {
    pub config_path: Option<PathBuf>,
    pub program: String,
    /// Working directory of the compose child; always absolute.
    pub project_dir: PathBuf,
    /// Value exported as `DATA_PATH`; always absolute.
    pub data_path: PathBuf,
    pub tunnel: bool,
    pub interrupt_grace: Duration,
}

/// Merge CLI arguments over the config file over built-in defaults.
///
/// `cwd` anchors relative paths and `launcher` is the running executable,
/// used to locate the default compose project.
pub fn build_profile(
    args: LaunchArgs,
    config: &LauncherConfig,
    cwd: &Path,
    launcher: &Path,
) -> LaunchProfile {
    let project_dir = args
        .project_dir
        .or_else(|| config.compose.project_dir.clone())
        .unwrap_or_else(|| project_dir_for(launcher));
    let project_dir = absolutize(&project_dir, cwd);

    let supplied_data = args.data.or_else(|| config.share.data_path.clone());
    let data_path = resolve_data_path(supplied_data.as_deref(), &project_dir, cwd);

    LaunchProfile {
        config_path: config.source_path.clone(),
        program: config.compose.program.clone(),
        project_dir,
        data_path,
        tunnel: args.tunnel,
        interrupt_grace: config.compose.interrupt_grace,
    }
}

/// Absolute path of the running launcher executable.
pub fn launcher_executable() -> Result<PathBuf, LaunchError> {
    env::current_exe().map_err(|source| LaunchError::CurrentExe { source })
}

/// Directory relative paths are resolved against.
pub fn current_dir() -> Result<PathBuf, LaunchError> {
    env::current_dir().map_err(|source| LaunchError::CurrentDir { source })
}

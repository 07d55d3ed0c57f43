use std::path::Path;

use tracing::{debug, info};

use super::{LauncherConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_default_missing(path: &Path) {
    debug!(
        target: "samba_launcher::config",
        path = %path.display(),
        env = CONFIG_ENV_KEY,
        default = DEFAULT_CONFIG_PATH,
        "No configuration file found; using built-in defaults"
    );
}

pub fn log_loaded(config: &LauncherConfig) {
    info!(
        target: "samba_launcher::config",
        path = %config
            .source_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
        program = %config.compose.program,
        project_dir = ?config.compose.project_dir,
        interrupt_grace_ms = config.compose.interrupt_grace.as_millis() as u64,
        data_path = ?config.share.data_path,
        "Configuration file loaded successfully"
    );
}

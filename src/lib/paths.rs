//! Path resolution for the compose project and the shared data directory.

use std::path::{Path, PathBuf};

/// Name of the compose project directory that sits next to the launcher.
pub const PROJECT_DIR_NAME: &str = "samba";
/// Name of the share directory inside the compose project.
pub const DATA_DIR_NAME: &str = "data";

/// Compose project directory for a launcher located at `launcher`.
pub fn project_dir_for(launcher: &Path) -> PathBuf {
    launcher
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(PROJECT_DIR_NAME)
}

/// Resolve the share directory handed to the compose project as `DATA_PATH`.
///
/// Falls back to `<project_dir>/data` when nothing was supplied. The result is
/// absolute but not canonicalized, and its existence is not checked.
pub fn resolve_data_path(supplied: Option<&Path>, project_dir: &Path, cwd: &Path) -> PathBuf {
    match supplied {
        Some(path) => absolutize(path, cwd),
        None => absolutize(&project_dir.join(DATA_DIR_NAME), cwd),
    }
}

/// Join relative paths onto `cwd`; absolute paths are returned untouched.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

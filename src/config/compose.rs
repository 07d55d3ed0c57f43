use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;

use crate::lib::{compose::DEFAULT_COMPOSE_PROGRAM, errors::ConfigError};

/// How long the compose child may keep running after the launcher was interrupted.
pub const DEFAULT_INTERRUPT_GRACE_MS: u64 = 250;
pub const MAX_INTERRUPT_GRACE_MS: u64 = 60_000;

/// Compose invocation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeSection {
    pub program: String,
    pub project_dir: Option<PathBuf>,
    pub interrupt_grace: Duration,
}

impl Default for ComposeSection {
    fn default() -> Self {
        Self {
            program: DEFAULT_COMPOSE_PROGRAM.to_string(),
            project_dir: None,
            interrupt_grace: Duration::from_millis(DEFAULT_INTERRUPT_GRACE_MS),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawComposeSection {
    pub program: Option<String>,
    pub project_dir: Option<PathBuf>,
    pub interrupt_grace_ms: Option<u64>,
}

pub fn parse_compose_section(
    raw: Option<RawComposeSection>,
    path: &Path,
) -> Result<ComposeSection, ConfigError> {
    let compose_raw = raw.unwrap_or_default();

    let program = compose_raw
        .program
        .unwrap_or_else(|| DEFAULT_COMPOSE_PROGRAM.to_string());
    if program.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "compose.program",
            message: "Specify the compose program (for example `docker`)".into(),
        });
    }

    let project_dir = compose_raw
        .project_dir
        .filter(|dir| !dir.as_os_str().is_empty());

    let grace_ms = compose_raw
        .interrupt_grace_ms
        .unwrap_or(DEFAULT_INTERRUPT_GRACE_MS);
    validate_grace(grace_ms, path)?;

    Ok(ComposeSection {
        program,
        project_dir,
        interrupt_grace: Duration::from_millis(grace_ms),
    })
}

fn validate_grace(grace_ms: u64, path: &Path) -> Result<(), ConfigError> {
    if grace_ms <= MAX_INTERRUPT_GRACE_MS {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "compose.interrupt_grace_ms",
        message: format!("Use a value between 0 and {MAX_INTERRUPT_GRACE_MS}"),
    })
}

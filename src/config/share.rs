use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

/// Network share settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareSection {
    pub data_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawShareSection {
    pub data_path: Option<PathBuf>,
}

pub fn parse_share_section(
    raw: Option<RawShareSection>,
    _path: &Path,
) -> Result<ShareSection, ConfigError> {
    let share_raw = raw.unwrap_or_default();
    Ok(ShareSection {
        data_path: share_raw
            .data_path
            .filter(|path| !path.as_os_str().is_empty()),
    })
}

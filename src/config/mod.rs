//! Load and validate launcher configuration.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod compose;
pub mod share;
pub mod telemetry;

pub use compose::{
    parse_compose_section, ComposeSection, RawComposeSection, DEFAULT_INTERRUPT_GRACE_MS,
    MAX_INTERRUPT_GRACE_MS,
};
pub use share::{parse_share_section, RawShareSection, ShareSection};

pub const CONFIG_ENV_KEY: &str = "SAMBA_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "samba.toml";

/// Top-level configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LauncherConfig {
    pub compose: ComposeSection,
    pub share: ShareSection,
    /// `None` when no file was read and built-in defaults apply.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
struct RawLauncherConfig {
    #[serde(default)]
    compose: Option<RawComposeSection>,
    #[serde(default)]
    share: Option<RawShareSection>,
}

impl LauncherConfig {
    /// Load an explicitly requested file, or `samba.toml` when it exists.
    ///
    /// A missing default file is not an error; a missing explicit file is.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if path.is_file() {
                    Self::load_from_path(path)
                } else {
                    telemetry::log_default_missing(&path);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "samba_launcher::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder()
            .add_source(config::File::from(path.clone()).format(config::FileFormat::Toml));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "samba_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "samba_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "samba_launcher::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawLauncherConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let compose = parse_compose_section(raw.compose, &path)?;
        let share = parse_share_section(raw.share, &path)?;

        Ok(Self {
            compose,
            share,
            source_path: Some(path),
        })
    }
}

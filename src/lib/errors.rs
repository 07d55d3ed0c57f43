use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures that abort a launch.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Device credentials are unset or empty; nothing was spawned.
    #[error("Required environment variables are missing or empty: {}", names.join(", "))]
    MissingCredentials { names: Vec<&'static str> },
    #[error("Failed to determine the current directory: {source}")]
    CurrentDir {
        #[source]
        source: io::Error,
    },
    #[error("Failed to locate the launcher executable: {source}")]
    CurrentExe {
        #[source]
        source: io::Error,
    },
    #[error("Failed to install the interrupt handler: {source}")]
    Signal {
        #[source]
        source: io::Error,
    },
    #[error("Failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while waiting for `{program}`: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{program}` exited abnormally (exit={exit_code})")]
    CommandFailed { program: String, exit_code: i32 },
    #[error("`{program}` was terminated by signal {signal}")]
    CommandSignaled { program: String, signal: i32 },
}

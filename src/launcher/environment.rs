//! Environment record handed to the compose child.

use std::{
    collections::BTreeMap,
    ffi::{OsStr, OsString},
    path::Path,
};

use crate::lib::errors::LaunchError;

pub const DATA_PATH_ENV: &str = "DATA_PATH";
pub const USER_ID_ENV: &str = "USERID";
pub const GROUP_ID_ENV: &str = "GROUPID";

pub const DEVICE_IP_ENV: &str = "AXIS_DEVICE_IP";
pub const DEVICE_PASS_ENV: &str = "AXIS_DEVICE_PASS";
pub const DEVICE_USER_ENV: &str = "AXIS_DEVICE_USER";
/// Device credentials the compose project reads; all must be non-empty.
pub const REQUIRED_CREDENTIALS: [&str; 3] = [DEVICE_IP_ENV, DEVICE_PASS_ENV, DEVICE_USER_ENV];

/// Numeric identity the share's files should be owned by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessIds {
    pub uid: u32,
    pub gid: u32,
}

impl ProcessIds {
    /// Real user and group ids of the running launcher.
    pub fn current() -> Self {
        // SAFETY: getuid() and getgid() are POSIX calls that cannot fail.
        let (uid, gid) = unsafe { (libc::getuid(), libc::getgid()) };
        Self { uid, gid }
    }
}

/// Copy of the parent environment plus the keys the compose project expects.
///
/// Keys and values are kept as raw OS strings so nothing is lost on the way
/// to the child. Built once and moved into the invocation; the launcher's own
/// process environment is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchEnvironment {
    vars: BTreeMap<OsString, OsString>,
}

impl LaunchEnvironment {
    /// Augment an arbitrary parent environment.
    pub fn from_parent<I>(parent: I, data_path: &Path, ids: ProcessIds) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut vars: BTreeMap<OsString, OsString> = parent.into_iter().collect();

        vars.insert(DATA_PATH_ENV.into(), data_path.as_os_str().to_os_string());
        vars.insert(USER_ID_ENV.into(), ids.uid.to_string().into());
        vars.insert(GROUP_ID_ENV.into(), ids.gid.to_string().into());

        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<&OsStr> {
        self.vars.get(OsStr::new(key)).map(OsString::as_os_str)
    }

    /// Fails unless every device credential is set to a non-empty value.
    pub fn require_credentials(&self) -> Result<(), LaunchError> {
        let names: Vec<&'static str> = REQUIRED_CREDENTIALS
            .into_iter()
            .filter(|name| self.get(name).map_or(true, OsStr::is_empty))
            .collect();

        if names.is_empty() {
            Ok(())
        } else {
            Err(LaunchError::MissingCredentials { names })
        }
    }

    pub fn into_vars(self) -> BTreeMap<OsString, OsString> {
        self.vars
    }
}

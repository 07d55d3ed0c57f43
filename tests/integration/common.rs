use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_samba-launcher");

/// Stands in for `docker compose`: the launcher runs `/bin/sh compose ...`,
/// so the shell executes this file with the remaining tokens as `$@`.
const STUB_COMPOSE_SCRIPT: &str = r#"printf '%s\n' "$@" > invocation.args
printf 'DATA_PATH=%s\nUSERID=%s\nGROUPID=%s\nAXIS_DEVICE_IP=%s\n' \
    "$DATA_PATH" "$USERID" "$GROUPID" "$AXIS_DEVICE_IP" > invocation.env
if [ -n "$STUB_IGNORE_INTERRUPT" ]; then
    trap '' INT
    exec sleep 30
fi
exit "${STUB_EXIT_CODE:-0}"
"#;

/// Temporary compose project plus a config file that points the launcher at the stub.
pub struct StubProject {
    root: TempDir,
}

impl StubProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("can create temporary directory");
        fs::create_dir_all(root.path().join("project")).expect("can create project directory");
        fs::write(
            root.path().join("project").join("compose"),
            STUB_COMPOSE_SCRIPT,
        )
        .expect("can write stub compose script");
        fs::write(
            root.path().join("samba.toml"),
            "[compose]\nprogram = \"/bin/sh\"\ninterrupt_grace_ms = 100\n",
        )
        .expect("can write config file");
        Self { root }
    }

    pub fn project_dir(&self) -> PathBuf {
        self.root.path().join("project")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("samba.toml")
    }

    /// Launcher command with device credentials and the stub config.
    pub fn command(&self) -> Command {
        let mut command = self.command_without_config();
        command.arg("--config").arg(self.config_path());
        command
    }

    /// Launcher command with device credentials, run from the temp root.
    pub fn command_without_config(&self) -> Command {
        let mut command = Command::new(BINARY_PATH);
        command
            .current_dir(self.root.path())
            .env_clear()
            .env("AXIS_DEVICE_IP", "192.168.0.90")
            .env("AXIS_DEVICE_USER", "root")
            .env("AXIS_DEVICE_PASS", "pass")
            .env("RUST_LOG", "warn")
            .arg("--project-dir")
            .arg(self.project_dir());
        command
    }

    pub fn run(&self, command: &mut Command) -> Output {
        command.output().expect("launcher should start")
    }

    pub fn has_started(&self) -> bool {
        self.project_dir().join("invocation.env").exists()
    }

    pub fn recorded_args(&self) -> Option<Vec<String>> {
        read_lines(&self.project_dir().join("invocation.args"))
    }

    pub fn recorded_env(&self, key: &str) -> Option<String> {
        let prefix = format!("{key}=");
        read_lines(&self.project_dir().join("invocation.env"))?
            .into_iter()
            .find_map(|line| line.strip_prefix(&prefix).map(str::to_string))
    }
}

fn read_lines(path: &Path) -> Option<Vec<String>> {
    fs::read_to_string(path)
        .ok()
        .map(|content| content.lines().map(str::to_string).collect())
}

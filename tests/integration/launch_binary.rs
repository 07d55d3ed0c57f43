use std::{
    path::PathBuf,
    process::Stdio,
    thread,
    time::{Duration, Instant},
};

use crate::common::StubProject;

#[test]
fn starts_compose_up_with_derived_environment() {
    let project = StubProject::new();
    let output = project.run(&mut project.command());

    assert!(
        output.status.success(),
        "launcher should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(project.recorded_args(), Some(vec!["up".to_string()]));
    assert_eq!(
        project.recorded_env("DATA_PATH").map(PathBuf::from),
        Some(project.project_dir().join("data"))
    );
    assert_eq!(
        project.recorded_env("AXIS_DEVICE_IP").as_deref(),
        Some("192.168.0.90")
    );
    for key in ["USERID", "GROUPID"] {
        let value = project.recorded_env(key).expect("id should be recorded");
        assert!(
            value.parse::<u32>().is_ok(),
            "{key} should be numeric, got {value:?}"
        );
    }
}

#[test]
fn tunnel_and_custom_data_path_are_forwarded() {
    let project = StubProject::new();
    let output = project.run(
        project
            .command()
            .arg("--tunnel")
            .arg("--data")
            .arg("/custom/path"),
    );

    assert!(
        output.status.success(),
        "launcher should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        project.recorded_args(),
        Some(vec![
            "--profile".to_string(),
            "tunnel".to_string(),
            "up".to_string()
        ])
    );
    assert_eq!(
        project.recorded_env("DATA_PATH").as_deref(),
        Some("/custom/path")
    );
}

#[test]
fn missing_credentials_fail_before_spawning() {
    let project = StubProject::new();
    let output = project.run(project.command().env_remove("AXIS_DEVICE_IP"));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("AXIS_DEVICE_IP"), "stderr: {stderr}");
    assert!(
        project.recorded_args().is_none(),
        "compose must not run without credentials"
    );
}

#[test]
fn empty_credential_is_treated_as_missing() {
    let project = StubProject::new();
    let output = project.run(project.command().env("AXIS_DEVICE_PASS", ""));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("AXIS_DEVICE_PASS"), "stderr: {stderr}");
    assert!(project.recorded_args().is_none());
}

#[test]
fn compose_failure_is_propagated() {
    let project = StubProject::new();
    let output = project.run(project.command().env("STUB_EXIT_CODE", "3"));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exit=3"), "stderr: {stderr}");
    assert_eq!(project.recorded_args(), Some(vec!["up".to_string()]));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let project = StubProject::new();
    let output = project.run(
        project
            .command_without_config()
            .arg("--config")
            .arg(project.project_dir().join("missing.toml")),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(project.recorded_args().is_none());
}

#[test]
fn absent_default_config_falls_back_to_docker() {
    let project = StubProject::new();
    // No samba.toml in the working directory and no --config: the default
    // program is used, which cannot be `/bin/sh`, so the stub never runs.
    let output = project.run(
        project
            .command_without_config()
            .current_dir(project.project_dir())
            .env("PATH", "/nonexistent"),
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("docker"), "stderr: {stderr}");
    assert!(project.recorded_args().is_none());
}

#[test]
fn interrupt_stops_a_stubborn_child_after_grace_period() {
    let project = StubProject::new();
    let mut child = project
        .command()
        .env("STUB_IGNORE_INTERRUPT", "1")
        .env("PATH", "/usr/bin:/bin")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .expect("launcher should start");

    let startup_deadline = Instant::now() + Duration::from_secs(10);
    while !project.has_started() {
        assert!(
            Instant::now() < startup_deadline,
            "stub compose never started"
        );
        thread::sleep(Duration::from_millis(20));
    }

    let interrupted_at = Instant::now();
    // The stub ignores SIGINT, so only the launcher reacts to this one.
    let rc = unsafe { libc::kill(child.id() as libc::pid_t, libc::SIGINT) };
    assert_eq!(rc, 0, "SIGINT should be delivered to the launcher");

    let exit_deadline = interrupted_at + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().expect("can poll launcher") {
            break status;
        }
        if Instant::now() >= exit_deadline {
            let _ = child.kill();
            panic!("launcher did not stop after SIGINT");
        }
        thread::sleep(Duration::from_millis(20));
    };
    let elapsed = interrupted_at.elapsed();

    let output = child.wait_with_output().expect("can collect launcher output");
    assert!(
        status.success(),
        "interrupt should be a clean stop ({status:?}): {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        elapsed < Duration::from_secs(5),
        "launcher should kill the child after the 100ms grace period, took {elapsed:?}"
    );
}

use crate::repo;
use anyhow::Result;
use std::process::{Command, Stdio};

/// One `cargo` invocation of the quality gate.
struct Step {
    label: &'static str,
    args: &'static [&'static str],
}

const STEPS: &[Step] = &[
    Step {
        label: "cargo fmt --all -- --check",
        args: &["fmt", "--all", "--", "--check"],
    },
    Step {
        label: "cargo clippy --workspace --all-targets -- -D warnings",
        args: &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    },
    Step {
        label: "cargo test --workspace",
        args: &["test", "--workspace"],
    },
];

const RELEASE_STEP: Step = Step {
    label: "cargo build --release",
    args: &["build", "--release"],
};

pub fn run(skip_release: bool) -> Result<()> {
    let root = repo::repo_root()?;
    for step in STEPS {
        run_step(&root, step)?;
    }
    if !skip_release {
        run_step(&root, &RELEASE_STEP)?;
    }
    Ok(())
}

fn run_step(root: &std::path::Path, step: &Step) -> Result<()> {
    eprintln!("==> {}", step.label);
    let status = Command::new("cargo")
        .args(step.args)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("{} failed (status {status})", step.label);
    }
    Ok(())
}

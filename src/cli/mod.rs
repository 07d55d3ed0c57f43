//! CLI argument surface and `LaunchProfile` resolution.

pub mod args;
pub mod profile;

pub use args::LaunchArgs;
pub use profile::{build_profile, current_dir, launcher_executable, LaunchProfile};

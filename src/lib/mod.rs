//! Shared library modules providing error types, path and command helpers, and telemetry initialization.

pub mod compose;
pub mod errors;
pub mod paths;
pub mod telemetry;

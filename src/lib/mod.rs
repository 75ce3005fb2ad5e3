//! Shared library modules providing error types, path resolution, directory
//! probing, and telemetry initialization.

pub mod errors;
pub mod fs;
pub mod paths;
pub mod telemetry;

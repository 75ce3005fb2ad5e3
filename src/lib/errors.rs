use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while probing a directory.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The path could not be checked at all (permission, I/O). This is an
    /// inconclusive answer, distinct from "does not exist".
    #[error("Failed to check directory {path}: {source}")]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors that can occur while resolving the source root.
#[derive(Debug, Error)]
pub enum RootError {
    /// The running executable's location could not be determined.
    #[error("Failed to locate the running executable: {source}")]
    ExeLocation {
        #[source]
        source: io::Error,
    },
    /// The executable sits too close to the filesystem root to derive a
    /// source root two levels above it.
    #[error("Executable path {path} has no grandparent directory to use as source root")]
    NoGrandparent { path: PathBuf },
    /// The current working directory is needed to absolutize a relative
    /// `--root` value but could not be read.
    #[error("Failed to obtain current directory: {source}")]
    CurrentDir {
        #[source]
        source: io::Error,
    },
}

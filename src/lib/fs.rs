//! Directory probing with a three-way outcome.

use std::{fs, io, path::Path};

use tracing::debug;

use crate::lib::errors::ProbeError;

/// Definitive answer for a directory probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Exists,
    DoesNotExist,
}

impl DirStatus {
    /// Textual boolean in the rendering GN consumers parse.
    pub const fn as_gn_bool(&self) -> &'static str {
        match self {
            DirStatus::Exists => "True",
            DirStatus::DoesNotExist => "False",
        }
    }

    pub const fn exists(&self) -> bool {
        matches!(self, DirStatus::Exists)
    }
}

/// Check whether `path` names an existing directory.
///
/// `NotFound` and `NotADirectory` are definitive negatives. Any other OS
/// error (permission denied on a parent, I/O fault) is inconclusive and
/// surfaces as `ProbeError::Inaccessible` so callers never mistake an
/// unreadable path for a missing one. Symlinks are followed; a symlink to a
/// nonexistent target reports `DoesNotExist`.
pub fn probe_dir(path: &Path) -> Result<DirStatus, ProbeError> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(DirStatus::Exists),
        Ok(_) => {
            debug!(
                target: "dir_probe::fs",
                path = %path.display(),
                "Path exists but is not a directory"
            );
            Ok(DirStatus::DoesNotExist)
        }
        Err(err)
            if matches!(
                err.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
        {
            Ok(DirStatus::DoesNotExist)
        }
        Err(source) => Err(ProbeError::Inaccessible {
            path: path.to_path_buf(),
            source,
        }),
    }
}

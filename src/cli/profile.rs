//! ProbeProfile and source-root resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use tracing::debug;

use crate::lib::errors::RootError;

const DIR_PROBE_ROOT_ENV: &str = "DIR_PROBE_ROOT";

/// Output format for the probe verdict.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Bare `True`/`False`, the GN consumer contract.
    Text,
    /// Single-line JSON report.
    Json,
}

/// Where the source root came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    Cli,
    Env,
    Executable,
}

impl RootSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RootSource::Cli => "cli",
            RootSource::Env => "env",
            RootSource::Executable => "executable",
        }
    }
}

/// Resolved probe invocation.
#[derive(Debug, Clone)]
pub struct ProbeProfile {
    pub directory_path: String,
    pub source_root: PathBuf,
    pub root_source: RootSource,
    pub format: OutputFormat,
}

/// Resolve the source root in the order: CLI override → env var → two
/// directory levels above the running executable.
///
/// The executable fallback preserves the historical deployment layout where
/// the helper is installed two levels below the source tree root.
pub fn resolve_source_root(override_root: Option<PathBuf>) -> Result<(PathBuf, RootSource), RootError> {
    if let Some(root) = override_root {
        let root = absolutize(root)?;
        debug!(target: "dir_probe::profile", root = %root.display(), "Source root from CLI");
        return Ok((root, RootSource::Cli));
    }

    if let Some(root) = env::var_os(DIR_PROBE_ROOT_ENV).map(PathBuf::from) {
        let root = absolutize(root)?;
        debug!(target: "dir_probe::profile", root = %root.display(), "Source root from environment");
        return Ok((root, RootSource::Env));
    }

    let exe = env::current_exe().map_err(|source| RootError::ExeLocation { source })?;
    let root = root_above_helper(&exe)?;
    debug!(target: "dir_probe::profile", root = %root.display(), "Source root inferred from executable");
    Ok((root, RootSource::Executable))
}

/// Two directory levels above the helper's own location.
fn root_above_helper(helper: &Path) -> Result<PathBuf, RootError> {
    helper
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| RootError::NoGrandparent {
            path: helper.to_path_buf(),
        })
}

fn absolutize(path: PathBuf) -> Result<PathBuf, RootError> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = env::current_dir().map_err(|source| RootError::CurrentDir { source })?;
    Ok(cwd.join(path))
}

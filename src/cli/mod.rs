//! CLI entrypoint module structure.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use serde::Serialize;

use crate::lib::{
    fs::{probe_dir, DirStatus},
    paths,
};

pub mod args;
pub mod profile;

pub use args::ProbeArgs;
pub use profile::{resolve_source_root, OutputFormat, ProbeProfile, RootSource};

/// Fallback program name for the usage message when argv is empty.
const PROGRAM_NAME: &str = "dir-probe";

/// Outcome of one CLI invocation, with stream attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliOutcome {
    /// Probe verdict for stdout.
    Verdict(String),
    /// Help or version text for stdout.
    Info(String),
    /// Usage error for stderr.
    Usage(String),
    /// Inconclusive check (filesystem fault) for stderr.
    Fault(String),
}

impl CliOutcome {
    pub const fn exit_code(&self) -> u8 {
        match self {
            CliOutcome::Verdict(_) | CliOutcome::Info(_) => 0,
            CliOutcome::Usage(_) => 1,
            CliOutcome::Fault(_) => 2,
        }
    }
}

/// Run one probe invocation against raw argv.
///
/// The usage gate never touches the filesystem: a wrong argument count is
/// answered before any root resolution or probe happens.
pub fn run(argv: &[String]) -> CliOutcome {
    let program = argv.first().map(String::as_str).unwrap_or(PROGRAM_NAME);

    let args = match ProbeArgs::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) => return usage_outcome(program, &err),
    };

    let profile = match args.build() {
        Ok(profile) => profile,
        Err(err) => return CliOutcome::Fault(format!("{err:#}")),
    };

    execute_probe(&profile)
}

/// Resolve the argument, probe the directory, and format the verdict.
pub fn execute_probe(profile: &ProbeProfile) -> CliOutcome {
    let resolved = paths::resolve(&profile.directory_path, &profile.source_root);

    let status = match probe_dir(&resolved) {
        Ok(status) => status,
        Err(err) => return CliOutcome::Fault(err.to_string()),
    };

    match profile.format {
        OutputFormat::Text => CliOutcome::Verdict(status.as_gn_bool().to_string()),
        OutputFormat::Json => match render_report(profile, &resolved, status) {
            Ok(report) => CliOutcome::Verdict(report),
            Err(err) => CliOutcome::Fault(format!("{err:#}")),
        },
    }
}

/// Single-line JSON report emitted for `--format json`.
#[derive(Debug, Serialize)]
struct ProbeReport<'a> {
    path: &'a str,
    resolved_path: String,
    exists: bool,
    root: String,
    root_source: &'static str,
}

fn render_report(
    profile: &ProbeProfile,
    resolved: &std::path::Path,
    status: DirStatus,
) -> Result<String> {
    let report = ProbeReport {
        path: &profile.directory_path,
        resolved_path: resolved.display().to_string(),
        exists: status.exists(),
        root: profile.source_root.display().to_string(),
        root_source: profile.root_source.as_str(),
    };
    Ok(serde_json::to_string(&report)?)
}

/// Map a clap parse error to the CLI contract: help/version pass through on
/// stdout with exit 0, everything else is the one-line usage error.
fn usage_outcome(program: &str, err: &clap::Error) -> CliOutcome {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            CliOutcome::Info(err.render().to_string())
        }
        _ => CliOutcome::Usage(format!("Usage: {program} <directory_path>")),
    }
}

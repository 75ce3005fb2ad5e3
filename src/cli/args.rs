//! CLI argument definitions and `ProbeProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{resolve_source_root, OutputFormat, ProbeProfile};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Directory existence probe for GN build files",
    long_about = None
)]
pub struct ProbeArgs {
    /// Directory to check; `//`-prefixed paths resolve against the source root.
    pub directory_path: String,
    /// Source root for `//` paths (overrides DIR_PROBE_ROOT).
    #[arg(long = "root")]
    pub root_override: Option<PathBuf>,
    /// Output format for the verdict.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ProbeArgs {
    /// Build a `ProbeProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<ProbeProfile> {
        let (source_root, root_source) = resolve_source_root(self.root_override)?;

        Ok(ProbeProfile {
            directory_path: self.directory_path,
            source_root,
            root_source,
            format: self.format,
        })
    }
}

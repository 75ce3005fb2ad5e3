//! GN path notation helpers shared across modules.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Marker GN build files use for source-root-relative paths.
pub const ROOT_RELATIVE_MARKER: &str = "//";

/// Returns true if the raw argument uses GN root-relative notation.
pub fn is_root_relative(raw: &str) -> bool {
    raw.starts_with(ROOT_RELATIVE_MARKER)
}

/// Resolve a raw path argument against the source root.
///
/// `//sub/dir` becomes `<source_root>/sub/dir`; anything else passes through
/// unchanged and follows normal OS semantics relative to the working
/// directory. A bare `//` resolves to the source root itself.
pub fn resolve(raw: &str, source_root: &Path) -> PathBuf {
    if let Some(relative) = raw.strip_prefix(ROOT_RELATIVE_MARKER) {
        let resolved = source_root.join(relative);
        debug!(
            target: "dir_probe::paths",
            raw,
            resolved = %resolved.display(),
            "Resolved root-relative path"
        );
        return resolved;
    }
    PathBuf::from(raw)
}

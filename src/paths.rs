//! Source map and bundle path resolution
//!
//! Both downstream invocations (bundler and uploader) consume the same pair
//! of paths, derived once per run from the sourcemaps directory, the target
//! platform, and optional user overrides.

use std::path::{Path, PathBuf};

/// The two file locations a pipeline run operates on.
///
/// Computed once, immutable afterwards. No existence check is performed
/// here; a bad path surfaces as a failure of the invoked tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Where the source map is written by the bundler and read by the uploader
    pub source_map: PathBuf,
    /// Where the bundle is written by the bundler and read by the uploader
    pub bundle: PathBuf,
}

/// Resolve the source map and bundle paths for one pipeline run.
///
/// An override wins verbatim when present and non-empty; otherwise the
/// platform-derived default filename is used. Unknown or empty platform
/// strings still yield well-formed paths.
pub fn resolve(
    dir: &Path,
    platform: &str,
    sourcemap: Option<&str>,
    bundle: Option<&str>,
) -> ResolvedPaths {
    ResolvedPaths {
        source_map: join_or_default(dir, sourcemap, &format!("{platform}.bundle.map")),
        bundle: join_or_default(dir, bundle, &format!("{platform}.bundle")),
    }
}

fn join_or_default(dir: &Path, override_name: Option<&str>, default_name: &str) -> PathBuf {
    match override_name {
        Some(name) if !name.is_empty() => dir.join(name),
        _ => dir.join(default_name),
    }
}

//! Filesystem write-permission check.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::validation::{CheckCategory, ValidationResult};

/// File written and removed to prove a directory is writable.
pub const MARKER_FILE: &str = ".test_write";

fn probe_writable(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let marker = dir.join(MARKER_FILE);
    fs::write(&marker, "test")?;
    fs::remove_file(&marker)
}

/// Ensure every path exists (creating it if needed) and accepts writes.
///
/// Relative paths are resolved against `base`; messages show them as
/// configured.
pub fn check_required_paths(paths: &[PathBuf], base: &Path) -> ValidationResult {
    let name = CheckCategory::FilePermissions.result_name();

    let issues: Vec<String> = paths
        .iter()
        .filter_map(|path| {
            let resolved = if path.is_absolute() {
                path.clone()
            } else {
                base.join(path)
            };
            probe_writable(&resolved)
                .err()
                .map(|e| format!("{} ({})", path.display(), e))
        })
        .collect();

    if issues.is_empty() {
        ValidationResult::pass(
            name,
            format!("All {} paths have proper permissions", paths.len()),
        )
    } else {
        ValidationResult::fail(
            name,
            format!("Permission issues with: {}", issues.join(", ")),
        )
    }
}

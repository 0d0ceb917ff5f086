use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::config::ScanConfig;

/// Recursively collect every file named `scan.manifest` below `root`.
///
/// Directories starting with `.` or whose name contains one of `scan.exclude`
/// are pruned. Only directories below `root` are checked, so a root that itself
/// lives under `node_modules/` or a dot-directory is still scanned. Results follow
/// directory-listing order; symlinks are not followed. Any traversal error is fatal.
pub fn find_manifests(root: &Path, scan: &ScanConfig) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    let walker = WalkDir::new(root).min_depth(1).into_iter().filter_entry(|e| {
        // min_depth still hands the root to this predicate
        e.depth() == 0
            || !(e.file_type().is_dir() && is_pruned(&e.file_name().to_string_lossy(), scan))
    });

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_dir() && entry.file_name() == scan.manifest.as_str() {
            found.push(entry.into_path());
        }
    }

    Ok(found)
}

fn is_pruned(dir_name: &str, scan: &ScanConfig) -> bool {
    dir_name.starts_with('.') || scan.exclude.iter().any(|ex| dir_name.contains(ex.as_str()))
}

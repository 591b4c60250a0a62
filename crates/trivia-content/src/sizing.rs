//! On-disk size accounting for the manifest.
//!
//! Missing or unreadable entries count as zero bytes. Directory walks use
//! an explicit work stack with a depth bound, never follow symlinks, and
//! skip directories already visited.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Maximum directory depth below the starting directory.
pub const MAX_WALK_DEPTH: usize = 32;

/// Size of a regular file in bytes, or zero.
pub fn file_size(path: &Path) -> u64 {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.is_file() => meta.len(),
        _ => 0,
    }
}

/// Total size of all regular files below `dir`.
///
/// `exclude` names a file that is accounted for separately and must not be
/// counted again.
pub fn directory_size(dir: &Path, exclude: Option<&Path>) -> u64 {
    let mut total = 0u64;
    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut stack: Vec<(PathBuf, usize)> = vec![(dir.to_path_buf(), 0)];

    while let Some((current, depth)) = stack.pop() {
        let key = current.canonicalize().unwrap_or_else(|_| current.clone());
        if !visited.insert(key) {
            continue;
        }

        let entries = match std::fs::read_dir(&current) {
            Ok(entries) => entries,
            Err(e) => {
                if depth > 0 || current.exists() {
                    tracing::warn!(dir = %current.display(), error = %e, "failed to read directory while sizing");
                }
                continue;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_symlink() {
                tracing::debug!(path = %path.display(), "skipping symlink while sizing");
                continue;
            }
            if file_type.is_dir() {
                if depth + 1 > MAX_WALK_DEPTH {
                    tracing::warn!(dir = %path.display(), "directory nesting exceeds walk depth; skipped");
                    continue;
                }
                stack.push((path, depth + 1));
            } else if file_type.is_file() {
                if exclude.is_some_and(|ex| ex == path.as_path()) {
                    continue;
                }
                total += entry.metadata().map(|m| m.len()).unwrap_or(0);
            }
        }
    }

    total
}

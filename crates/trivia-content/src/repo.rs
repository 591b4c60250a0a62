//! Repository root discovery.
//!
//! The repository root is the nearest ancestor holding a `rounds/`
//! directory. Commands resolve their default paths against it so they
//! behave the same from any subdirectory.

use std::path::{Path, PathBuf};

/// Name of the rounds directory under the repository root.
pub const ROUNDS_DIR: &str = "rounds";

/// Maximum number of parent directories inspected above the start.
pub const MAX_ROOT_ASCENT: usize = 10;

/// Walk up from `start` looking for a directory that contains `rounds/`.
///
/// Falls back to `start` when no such ancestor is found within
/// [`MAX_ROOT_ASCENT`] levels.
pub fn find_repository_root(start: &Path) -> PathBuf {
    let mut dir = start;
    for _ in 0..=MAX_ROOT_ASCENT {
        if dir.join(ROUNDS_DIR).is_dir() {
            return dir.to_path_buf();
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }
    tracing::debug!(start = %start.display(), "no rounds/ directory above start");
    start.to_path_buf()
}

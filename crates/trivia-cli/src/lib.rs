//! # trivia-cli: Command-Line Interface for the Content Repository
//!
//! Provides the `trivia` binary.
//!
//! ## Subcommands
//!
//! - `trivia validate`: Lenient validation of one round or the whole tree.
//! - `trivia check`: Strict, fail-fast structural check of one round.
//! - `trivia manifest`: Build `manifest.json` from the rounds tree.
//! - `trivia list`: Tabular listing of the rounds.
//!
//! ```bash
//! trivia validate --all
//! trivia validate rounds/demo_round
//! trivia check demo_round
//! trivia manifest rounds manifest.json --generated-at 2024-05-01T00:00:00Z
//! ```
//!
//! ## Exit Codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | Success                                   |
//! | 1    | Validation or structural check failed     |
//! | 2    | Operational error (missing root, I/O, …)  |
//!
//! Argument parsing and output live here; the checks themselves live in
//! `trivia-content`.

pub mod check;
pub mod config;
pub mod list;
pub mod manifest;
pub mod validate;

use std::path::{Path, PathBuf};

pub use config::{ConfigError, TriviaConfig};

/// Exit code for a successful run.
pub const EXIT_OK: u8 = 0;

/// Exit code when content fails validation.
pub const EXIT_INVALID: u8 = 1;

/// Exit code for operational errors.
pub const EXIT_ERROR: u8 = 2;

/// Resolve a path that may be relative to the repository root.
///
/// If the path is absolute, returns it as-is. If relative and it exists
/// relative to `repo_root`, uses that. Otherwise returns the path relative
/// to the current directory.
pub fn resolve_path(path: &Path, repo_root: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let repo_relative = repo_root.join(path);
    if repo_relative.exists() {
        repo_relative
    } else {
        path.to_path_buf()
    }
}

/// Rounds directory for a command: the explicit argument if given,
/// otherwise the configured one.
pub fn rounds_dir(explicit: Option<&Path>, repo_root: &Path, config: &TriviaConfig) -> PathBuf {
    match explicit {
        Some(path) => resolve_path(path, repo_root),
        None => config.rounds_dir_in(repo_root),
    }
}
